use leptos::prelude::*;

use crate::domain::a001_rental::ui::list::state::RentalsContext;
use crate::domain::a001_rental::ui::list::RentalBoard;
use crate::shared::config::{load_config, Config};
use crate::shared::date_utils::{day_from_query, today};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("{}; falling back to built-in defaults", e);
        Config::default()
    });

    // `?date=YYYY-MM-DD` preselects a day, otherwise today
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let selected_date = day_from_query(&search).unwrap_or_else(today);

    // Provide the rentals page context to the whole app.
    provide_context(RentalsContext::new(&config, selected_date));

    view! {
        <RentalBoard />
    }
}
