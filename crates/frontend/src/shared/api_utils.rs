//! API utilities for frontend-backend communication
//!
//! Resolves the REST endpoints the page talks to.

use contracts::domain::a002_accommodation::AccommodationId;
use contracts::domain::common::AggregateId;

use crate::shared::config::ApiConfig;

/// Fallback origin when neither the config nor the window provide one
const FALLBACK_BASE: &str = "http://localhost";

/// Get the base URL for API requests from the current window location
///
/// # Returns
/// - Origin like "http://localhost" or "https://camping.example:8443"
/// - `None` if window is not available (tests, workers)
pub fn window_base() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;
    if host.is_empty() {
        return None;
    }
    Some(format!("{}//{}", protocol, host))
}

/// Fully resolved endpoint URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    rentals: String,
    accommodations: String,
}

impl ApiEndpoints {
    pub fn new(config: &ApiConfig) -> Self {
        let base = if config.base_url.trim().is_empty() {
            window_base().unwrap_or_else(|| FALLBACK_BASE.to_string())
        } else {
            config.base_url.clone()
        };
        Self::with_base(&base, &config.rentals_path, &config.accommodations_path)
    }

    pub fn with_base(base: &str, rentals_path: &str, accommodations_path: &str) -> Self {
        Self {
            rentals: join_url(base, rentals_path),
            accommodations: join_url(base, accommodations_path),
        }
    }

    /// Rentals collection endpoint
    pub fn rentals_url(&self) -> &str {
        &self.rentals
    }

    /// Single accommodation endpoint, target of the merge-patch
    ///
    /// # Example
    /// ```rust,ignore
    /// endpoints.accommodation_url(AccommodationId(10)); // ".../api/accommodations/10"
    /// ```
    pub fn accommodation_url(&self, id: AccommodationId) -> String {
        format!("{}/{}", self.accommodations, id.as_string())
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
