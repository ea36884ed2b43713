use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::parse_deposit_input;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AmountEntryStepProps {
    // Values owned by the parent flow
    pub deposit: f64,
    pub memo: String,

    // Setters and navigation
    pub on_deposit_change: Callback<f64>,
    pub on_memo_change: Callback<String>,
    pub on_next: Callback<()>,
    pub on_back: Callback<()>,
}

/// Text shown in the amount field for a deposit value. `NaN` shows as blank.
pub fn deposit_display_value(deposit: f64) -> String {
    if deposit.is_nan() {
        String::new()
    } else {
        deposit.to_string()
    }
}

/// Whether the text in the amount field no longer describes `deposit` and has to
/// be replaced. Text that parses to the same number is left alone so partial
/// input such as `1.0` or `007` survives re-renders.
pub fn needs_resync(raw: &str, deposit: f64) -> bool {
    let parsed = parse_deposit_input(raw);
    !(parsed == deposit || (parsed.is_nan() && deposit.is_nan()))
}

#[function_component(AmountEntryStep)]
pub fn amount_entry_step(props: &AmountEntryStepProps) -> Html {
    // What the user typed; the parent only sees the parsed number
    let raw_amount = use_state(|| deposit_display_value(props.deposit));

    use_effect_with(props.deposit.to_bits(), {
        let raw_amount = raw_amount.clone();
        let deposit = props.deposit;
        move |_| {
            if needs_resync(&raw_amount, deposit) {
                raw_amount.set(deposit_display_value(deposit));
            }
            || ()
        }
    });

    let on_amount_input = {
        let raw_amount = raw_amount.clone();
        let on_deposit_change = props.on_deposit_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            let deposit = parse_deposit_input(&raw);
            if deposit.is_nan() {
                Logger::warn_with_component("AmountEntryStep", "amount field is not a number, forwarding NaN");
            }
            raw_amount.set(raw);
            on_deposit_change.emit(deposit);
        })
    };

    let on_memo_input = {
        let on_memo_change = props.on_memo_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_memo_change.emit(input.value());
        })
    };

    let on_back_click = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let on_next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="amount-entry-step">
            <h2 class="step-title">{"금액 입력"}</h2>
            <input
                type="number"
                class="amount-input"
                placeholder="송금할 금액"
                value={(*raw_amount).clone()}
                oninput={on_amount_input}
            />

            <h2 class="step-title">{"메모 입력"}</h2>
            <input
                type="text"
                class="amount-input"
                placeholder="메모를 입력하세요."
                value={props.memo.clone()}
                oninput={on_memo_input}
            />

            <div class="step-buttons">
                <button type="button" class="btn btn-secondary" onclick={on_back_click}>
                    {"이전"}
                </button>
                <button type="button" class="btn btn-primary" onclick={on_next_click}>
                    {"다음"}
                </button>
            </div>
        </div>
    }
}
