pub mod row;
pub mod state;

use chrono::NaiveDate;
use contracts::domain::a001_rental::Rental;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use self::row::{RentalRow, RentalTableRow, TableKind};
use self::state::RentalsContext;
use crate::domain::a001_rental::filter::DateFilter;
use crate::domain::a001_rental::gesture::UpdateGesture;
use crate::shared::components::date_input::DateInput;

/// Arrivals and departures of the camping, with per-row availability updates
#[component]
pub fn RentalBoard() -> impl IntoView {
    let ctx = use_context::<RentalsContext>().expect("RentalsContext not found in context");
    let state = ctx.state;
    let date_filter = ctx.view.date_filter;

    let arrivals = Signal::derive(move || state.with(|s| s.arrivals(date_filter)));
    let departures = Signal::derive(move || state.with(|s| s.departures(date_filter)));

    let on_update = Callback::new(move |gesture: UpdateGesture| ctx.dispatch(gesture));

    ctx.load();

    view! {
        <header class="app-header">
            <h1>"Mon application de camping"</h1>
        </header>
        <main class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {(date_filter == DateFilter::SelectedDay).then(|| view! {
                        <DateInput
                            label="Jour"
                            value=Signal::derive(move || state.with(|s| s.selected_date))
                            on_change=Callback::new(move |day: NaiveDate| ctx.select_day(day))
                        />
                    })}
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.load()>
                        "Rafraîchir"
                    </Button>
                </div>
            </div>

            <h2>"Liste des arrivées"</h2>
            <RentalTable kind=TableKind::Arrivals rows=arrivals on_update=on_update />

            <h2>"Liste des départs"</h2>
            <RentalTable kind=TableKind::Departures rows=departures on_update=on_update />
        </main>
    }
}

#[component]
fn RentalTable(
    kind: TableKind,
    #[prop(into)]
    rows: Signal<Vec<Rental>>,
    on_update: Callback<UpdateGesture>,
) -> impl IntoView {
    let (first_header, second_header) = kind.date_headers();

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>{first_header}</TableHeaderCell>
                    <TableHeaderCell>{second_header}</TableHeaderCell>
                    <TableHeaderCell>"Nom"</TableHeaderCell>
                    <TableHeaderCell>"Type d'hébergement"</TableHeaderCell>
                    <TableHeaderCell>"Emplacement"</TableHeaderCell>
                    <TableHeaderCell>"Disponibilité"</TableHeaderCell>
                    <TableHeaderCell>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        return view! {
                            <TableRow>
                                <TableCell><TableCellLayout>"Aucune réservation"</TableCellLayout></TableCell>
                            </TableRow>
                        }
                        .into_any();
                    }
                    rows.iter()
                        .map(|r| view! { <RentalTableRow row=RentalRow::from(r) kind=kind on_update=on_update /> })
                        .collect_view()
                        .into_any()
                }}
            </TableBody>
        </Table>
    }
}
