use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_rental::api::HttpReservationApi;
use crate::domain::a001_rental::gesture::UpdateGesture;
use crate::domain::a001_rental::{ReservationSynchronizer, ViewState};
use crate::shared::config::{Config, ViewConfig};

pub type PageSynchronizer = ReservationSynchronizer<HttpReservationApi, RwSignal<ViewState>>;

/// Rentals page context: reactive view state plus the synchronizer driving it
#[derive(Clone, Copy)]
pub struct RentalsContext {
    pub state: RwSignal<ViewState>,
    pub view: ViewConfig,
    sync: StoredValue<PageSynchronizer, LocalStorage>,
}

impl RentalsContext {
    pub fn new(config: &Config, selected_date: NaiveDate) -> Self {
        let state = RwSignal::new(ViewState::new(selected_date));
        let api = HttpReservationApi::new(config.endpoints());
        let sync = ReservationSynchronizer::new(api, state, config.view.update_strategy);
        Self {
            state,
            view: config.view,
            sync: StoredValue::new_local(sync),
        }
    }

    /// Reload the rentals in the background
    pub fn load(&self) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            // failures are logged by the synchronizer, the last good rows stay
            let _ = sync.load_reservations().await;
        });
    }

    /// Push a row's availability change in the background
    pub fn dispatch(&self, gesture: UpdateGesture) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.handle_update_gesture(gesture).await;
        });
    }

    pub fn select_day(&self, day: NaiveDate) {
        self.state.update(|s| s.selected_date = day);
    }
}
