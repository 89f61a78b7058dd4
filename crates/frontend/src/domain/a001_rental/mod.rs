//! Rentals: loading, arrival/departure views and availability updates.

pub mod api;
pub mod error;
pub mod filter;
pub mod gesture;
pub mod state;
pub mod sync;
pub mod ui;

pub use error::SyncError;
pub use state::{StateCell, ViewState};
pub use sync::{ReservationSynchronizer, UpdateStrategy};
