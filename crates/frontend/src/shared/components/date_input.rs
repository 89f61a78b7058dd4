use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::date_utils::{input_value, parse_input_date};

/// Native date picker bound to a day
///
/// Cleared or unparsable input is ignored, the previous day stays selected.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<NaiveDate>,
    on_change: Callback<NaiveDate>,
    #[prop(optional, into)] label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {move || label.get().map(|l| view! { <span class="date-input__label">{l}</span> })}
            <input
                type="date"
                class="date-input__field"
                prop:value=move || input_value(value.get())
                on:change=move |ev| {
                    match parse_input_date(&event_target_value(&ev)) {
                        Some(day) => on_change.run(day),
                        None => log::debug!("Ignoring empty or invalid date input"),
                    }
                }
            />
        </label>
    }
}
