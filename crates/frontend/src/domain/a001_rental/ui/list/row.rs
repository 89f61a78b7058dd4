use contracts::domain::a001_rental::Rental;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, TableCell, TableCellLayout, TableRow};

use crate::domain::a001_rental::gesture::{availability_value, UpdateGesture, AVAILABLE, UNAVAILABLE};
use crate::shared::date_utils::format_day;

/// Which table a row belongs to; decides the order of the date columns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    Arrivals,
    Departures,
}

impl TableKind {
    pub fn date_headers(self) -> (&'static str, &'static str) {
        match self {
            TableKind::Arrivals => ("Date d'arrivée", "Date de départ"),
            TableKind::Departures => ("Date de départ", "Date d'arrivée"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RentalRow {
    pub id: String,
    pub accommodation_id: String,
    pub date_start: String,
    pub date_end: String,
    pub guest: String,
    pub accommodation_type: String,
    pub location: String,
    pub available: bool,
}

impl From<&Rental> for RentalRow {
    fn from(r: &Rental) -> Self {
        Self {
            id: r.id.as_string(),
            accommodation_id: r.accommodation.id.as_string(),
            date_start: format_day(&r.date_start),
            date_end: format_day(&r.date_end),
            guest: r.guest_name(),
            accommodation_type: r.accommodation.type_label().to_string(),
            location: r
                .accommodation
                .location_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            available: r.accommodation.availability,
        }
    }
}

impl RentalRow {
    /// (first, second) date cells for the given table
    pub fn dates(&self, kind: TableKind) -> (String, String) {
        match kind {
            TableKind::Arrivals => (self.date_start.clone(), self.date_end.clone()),
            TableKind::Departures => (self.date_end.clone(), self.date_start.clone()),
        }
    }
}

#[component]
pub fn RentalTableRow(
    row: RentalRow,
    kind: TableKind,
    on_update: Callback<UpdateGesture>,
) -> impl IntoView {
    // Pending choice; only sent when the button is pressed
    let (choice, set_choice) = signal(availability_value(row.available).to_string());
    let (first_date, second_date) = row.dates(kind);
    let id = row.id.clone();
    let accommodation_id = row.accommodation_id.clone();

    let submit = move |_: leptos::ev::MouseEvent| {
        match UpdateGesture::from_row(&id, &accommodation_id, &choice.get_untracked()) {
            Ok(gesture) => on_update.run(gesture),
            Err(e) => log::warn!("Ignoring update for row {}: {}", id, e),
        }
    };

    view! {
        <TableRow>
            <TableCell><TableCellLayout>{first_date}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{second_date}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{row.guest}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{row.accommodation_type}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{row.location}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <select
                        class="form__select"
                        on:change=move |ev| set_choice.set(event_target_value(&ev))
                    >
                        <option value=AVAILABLE selected=move || choice.get() == AVAILABLE>"Yes"</option>
                        <option value=UNAVAILABLE selected=move || choice.get() == UNAVAILABLE>"No"</option>
                    </select>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Primary on_click=submit>
                        "Mettre à jour"
                    </Button>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
