use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a001_rental::Rental;
use contracts::domain::a002_accommodation::AccommodationId;
use leptos::prelude::*;

use super::filter::{self, DateFilter};

/// Everything the rentals page renders from
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub selected_date: NaiveDate,
    /// Ordered as received from the backend
    pub reservations: Vec<Rental>,
}

impl ViewState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            reservations: Vec::new(),
        }
    }

    /// Arrivals under `date_filter`, relative to the selected day
    pub fn arrivals(&self, date_filter: DateFilter) -> Vec<Rental> {
        filter::arrivals(&self.reservations, date_filter.day(self.selected_date))
    }

    /// Departures under `date_filter`, relative to the selected day
    pub fn departures(&self, date_filter: DateFilter) -> Vec<Rental> {
        filter::departures(&self.reservations, date_filter.day(self.selected_date))
    }

    pub fn replace_reservations(&mut self, reservations: Vec<Rental>) {
        self.reservations = reservations;
    }

    /// Set the availability flag on every rental pointing at `accommodation_id`.
    /// Returns how many rows were touched.
    pub fn patch_availability(&mut self, accommodation_id: AccommodationId, available: bool) -> usize {
        let mut touched = 0;
        for rental in self
            .reservations
            .iter_mut()
            .filter(|r| r.accommodation.id == accommodation_id)
        {
            rental.accommodation.availability = available;
            touched += 1;
        }
        touched
    }
}

/// Shared handle to a [`ViewState`].
///
/// Implementations must not keep the state borrowed after the closure returns:
/// the synchronizer calls these between awaits and several updates may be in
/// flight at once.
pub trait StateCell {
    fn update_state(&self, f: impl FnOnce(&mut ViewState));
    fn read_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
}

impl StateCell for Rc<RefCell<ViewState>> {
    fn update_state(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut *self.borrow_mut());
    }

    fn read_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&*self.borrow())
    }
}

impl StateCell for RwSignal<ViewState> {
    fn update_state(&self, f: impl FnOnce(&mut ViewState)) {
        self.update(f);
    }

    fn read_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.with_untracked(f)
    }
}
