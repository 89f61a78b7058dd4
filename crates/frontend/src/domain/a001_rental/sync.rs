//! Reservation synchronizer: keeps the loaded rentals in step with the backend.

use std::rc::Rc;

use contracts::domain::a001_rental::{Rental, RentalId};
use contracts::domain::a002_accommodation::{AccommodationId, AvailabilityPatch};
use serde::Deserialize;

use super::api::ReservationApi;
use super::error::SyncError;
use super::gesture::UpdateGesture;
use super::state::StateCell;

/// What happens to the loaded rentals after a successful availability update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Patch the matching rows in place
    #[default]
    OptimisticPatch,
    /// Reload the whole collection from the backend
    ForcedRefresh,
}

/// Loads rentals into a [`StateCell`] and pushes availability changes.
///
/// No state borrow is held across an `.await`, so gestures may overlap;
/// whichever response lands last decides the final state.
pub struct ReservationSynchronizer<A, S> {
    api: Rc<A>,
    state: S,
    strategy: UpdateStrategy,
}

impl<A, S: Clone> Clone for ReservationSynchronizer<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
            strategy: self.strategy,
        }
    }
}

impl<A, S> ReservationSynchronizer<A, S>
where
    A: ReservationApi,
    S: StateCell,
{
    pub fn new(api: A, state: S, strategy: UpdateStrategy) -> Self {
        Self {
            api: Rc::new(api),
            state,
            strategy,
        }
    }

    /// Fetch the rentals and replace the loaded collection.
    ///
    /// On failure the previous collection is left as it was.
    pub async fn load_reservations(&self) -> Result<Vec<Rental>, SyncError> {
        log::debug!("Loading reservations");
        match self.api.fetch_rentals().await {
            Ok(rentals) => {
                log::info!("Loaded {} reservations", rentals.len());
                let loaded = rentals.clone();
                self.state.update_state(|s| s.replace_reservations(loaded));
                Ok(rentals)
            }
            Err(e) => {
                log::error!("Failed to load reservations: {}", e);
                Err(e)
            }
        }
    }

    /// Send the new availability of one accommodation, then bring the loaded
    /// rentals in line according to the configured strategy.
    pub async fn set_availability(
        &self,
        rental_id: RentalId,
        accommodation_id: AccommodationId,
        available: bool,
    ) -> Result<(), SyncError> {
        let patch = AvailabilityPatch::new(available);
        log::info!(
            "Updating accommodation {} (rental {}): {:?}",
            accommodation_id,
            rental_id,
            patch
        );

        let body = match self.api.patch_availability(accommodation_id, patch).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Failed to update accommodation {}: {}", accommodation_id, e);
                return Err(e);
            }
        };
        log::debug!("Accommodation {} updated: {}", accommodation_id, body);

        match self.strategy {
            UpdateStrategy::OptimisticPatch => {
                self.state.update_state(|s| {
                    let touched = s.patch_availability(accommodation_id, available);
                    log::debug!("Patched {} loaded rentals", touched);
                });
                Ok(())
            }
            UpdateStrategy::ForcedRefresh => self.load_reservations().await.map(|_| ()),
        }
    }

    /// Row gesture entry point, forwards straight to [`Self::set_availability`]
    pub async fn handle_update_gesture(&self, gesture: UpdateGesture) -> Result<(), SyncError> {
        self.set_availability(gesture.rental_id, gesture.accommodation_id, gesture.availability)
            .await
    }
}
