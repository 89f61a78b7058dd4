use async_trait::async_trait;
use contracts::domain::a001_rental::Rental;
use contracts::domain::a002_accommodation::{AccommodationId, AvailabilityPatch};
use contracts::shared::collection::RentalCollection;
use gloo_net::http::Request;

use super::error::SyncError;
use crate::shared::api_utils::ApiEndpoints;

/// Transport used by the synchronizer
#[async_trait(?Send)]
pub trait ReservationApi {
    /// GET the rentals collection, `member` in backend order
    async fn fetch_rentals(&self) -> Result<Vec<Rental>, SyncError>;

    /// Merge-patch one accommodation, returning the decoded response body
    async fn patch_availability(
        &self,
        accommodation_id: AccommodationId,
        patch: AvailabilityPatch,
    ) -> Result<serde_json::Value, SyncError>;
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// A read that does not succeed has no envelope to decode: reported as `Network`
pub fn check_load_status(status: u16, url: &str) -> Result<(), SyncError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(SyncError::Network(format!("Unexpected status {} from {}", status, url)))
    }
}

/// Update endpoint: anything outside 2xx is `HttpStatus(status)`
pub fn check_update_status(status: u16) -> Result<(), SyncError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(SyncError::HttpStatus(status))
    }
}

/// Browser `fetch` implementation over gloo-net
#[derive(Debug, Clone)]
pub struct HttpReservationApi {
    endpoints: ApiEndpoints,
}

impl HttpReservationApi {
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait(?Send)]
impl ReservationApi for HttpReservationApi {
    async fn fetch_rentals(&self) -> Result<Vec<Rental>, SyncError> {
        let url = self.endpoints.rentals_url();

        let response = Request::get(url)
            .header("Accept", "application/ld+json, application/json")
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("Failed to send request: {}", e)))?;

        check_load_status(response.status(), url)?;

        let page: RentalCollection = response
            .json()
            .await
            .map_err(|e| SyncError::Network(format!("Failed to parse response: {}", e)))?;

        Ok(page.into_members())
    }

    async fn patch_availability(
        &self,
        accommodation_id: AccommodationId,
        patch: AvailabilityPatch,
    ) -> Result<serde_json::Value, SyncError> {
        let url = self.endpoints.accommodation_url(accommodation_id);
        let body = serde_json::to_string(&patch)
            .map_err(|e| SyncError::Network(format!("Failed to serialize request: {}", e)))?;

        // `.json()` would force application/json; the endpoint wants merge-patch.
        let response = Request::patch(&url)
            .header("Content-Type", AvailabilityPatch::CONTENT_TYPE)
            .header("Accept", "application/ld+json, application/json")
            .body(body)
            .map_err(|e| SyncError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("Failed to send request: {}", e)))?;

        check_update_status(response.status())?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SyncError::Network(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_status_success_range() {
        for status in [200, 204, 299] {
            assert_eq!(check_update_status(status), Ok(()), "{}", status);
        }
    }

    #[test]
    fn test_update_status_failures_carry_code() {
        for status in [300, 404, 500] {
            assert_eq!(check_update_status(status), Err(SyncError::HttpStatus(status)));
        }
    }

    #[test]
    fn test_load_status() {
        assert_eq!(check_load_status(200, "http://localhost/api/rentals"), Ok(()));
        match check_load_status(500, "http://localhost/api/rentals") {
            Err(SyncError::Network(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("/api/rentals"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
        assert!(matches!(check_load_status(404, "x"), Err(SyncError::Network(_))));
        assert!(matches!(check_load_status(199, "x"), Err(SyncError::Network(_))));
    }
}
