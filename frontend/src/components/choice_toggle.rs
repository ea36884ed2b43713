use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChoiceToggleProps {
    /// Button captions, left to right
    pub labels: Vec<AttrValue>,
    /// Index of the selected button, if any
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
}

/// A row of buttons where at most one is marked selected.
/// Buttons are `type="button"` so they never submit the surrounding form.
#[function_component(ChoiceToggle)]
pub fn choice_toggle(props: &ChoiceToggleProps) -> Html {
    html! {
        <div class="choice-toggle">
            {for props.labels.iter().enumerate().map(|(index, label)| {
                let is_selected = props.selected == Some(index);
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(index))
                };

                html! {
                    <button
                        type="button"
                        class={classes!("choice-button", is_selected.then_some("selected"))}
                        {onclick}
                    >
                        {label.clone()}
                    </button>
                }
            })}
        </div>
    }
}
