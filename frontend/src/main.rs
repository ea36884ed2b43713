use yew::prelude::*;

use onboarding_frontend::components::{AmountEntryStep, ChildProfileStep};
use onboarding_frontend::services::date_utils::format_date_for_display;
use onboarding_frontend::services::logging::{Logger, LoggerConfig};
use shared::{AmountEntry, ChildProfile};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DemoStep {
    ChildProfile,
    Amount,
    Summary,
}

/// Demo host that chains the steps the way a parent flow would
#[function_component(App)]
fn app() -> Html {
    let step = use_state(|| DemoStep::ChildProfile);
    let profile = use_state(|| Option::<ChildProfile>::None);
    let entry = use_state(AmountEntry::default);

    let on_profile_next = {
        let step = step.clone();
        let profile = profile.clone();
        Callback::from(move |submitted: ChildProfile| {
            profile.set(Some(submitted));
            step.set(DemoStep::Amount);
        })
    };

    let on_deposit_change = {
        let entry = entry.clone();
        Callback::from(move |deposit: f64| {
            let mut next = (*entry).clone();
            next.set_deposit(deposit);
            entry.set(next);
        })
    };

    let on_memo_change = {
        let entry = entry.clone();
        Callback::from(move |memo: String| {
            let mut next = (*entry).clone();
            next.set_memo(memo);
            entry.set(next);
        })
    };

    let go_to = |target: DemoStep| {
        let step = step.clone();
        Callback::from(move |_: ()| step.set(target))
    };

    html! {
        <main class="app">
            {match *step {
                DemoStep::ChildProfile => html! {
                    <ChildProfileStep on_next={on_profile_next} />
                },
                DemoStep::Amount => html! {
                    <AmountEntryStep
                        deposit={entry.deposit}
                        memo={entry.memo.clone()}
                        {on_deposit_change}
                        {on_memo_change}
                        on_next={go_to(DemoStep::Summary)}
                        on_back={go_to(DemoStep::ChildProfile)}
                    />
                },
                DemoStep::Summary => html! {
                    <section class="summary">
                        {if let Some(profile) = (*profile).as_ref() {
                            html! {
                                <ul>
                                    <li>{format!("{} ({})", profile.child_name, profile.relation.label())}</li>
                                    <li>{format!("{}cm / {}kg", profile.height, profile.weight)}</li>
                                    <li>{format_date_for_display(&profile.birth_date)}</li>
                                    <li>{profile.gender.label()}</li>
                                </ul>
                            }
                        } else { html! {} }}

                        {match entry.checked_deposit() {
                            Ok(deposit) => html! { <p>{format!("{}원 · {}", deposit, entry.memo)}</p> },
                            Err(e) => html! { <p class="profile-error">{e.to_string()}</p> },
                        }}

                        <div class="step-buttons">
                            <button type="button" class="btn btn-secondary" onclick={go_to(DemoStep::Amount).reform(|_: MouseEvent| ())}>
                                {"이전"}
                            </button>
                        </div>
                    </section>
                },
            }}
        </main>
    }
}

fn main() {
    Logger::init(LoggerConfig::default());
    yew::Renderer::<App>::new().render();
}
