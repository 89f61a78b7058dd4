//! Arrival and departure views over the loaded rentals.

use chrono::NaiveDate;
use contracts::domain::a001_rental::Rental;
use serde::Deserialize;

/// Whether the views are narrowed to the selected day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    /// Both views list the whole collection
    #[default]
    #[serde(rename = "none")]
    AllDates,
    SelectedDay,
}

impl DateFilter {
    /// Day to filter on, if any
    pub fn day(self, selected: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateFilter::AllDates => None,
            DateFilter::SelectedDay => Some(selected),
        }
    }
}

/// Rentals arriving on `day`, or every rental when no day is given
pub fn arrivals(collection: &[Rental], day: Option<NaiveDate>) -> Vec<Rental> {
    select(collection, day, Rental::starts_on)
}

/// Rentals leaving on `day`, or every rental when no day is given
pub fn departures(collection: &[Rental], day: Option<NaiveDate>) -> Vec<Rental> {
    select(collection, day, Rental::ends_on)
}

fn select(
    collection: &[Rental],
    day: Option<NaiveDate>,
    on_day: fn(&Rental, NaiveDate) -> bool,
) -> Vec<Rental> {
    match day {
        Some(day) => collection.iter().filter(|r| on_day(r, day)).cloned().collect(),
        None => collection.to_vec(),
    }
}
