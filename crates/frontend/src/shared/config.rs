use serde::Deserialize;
use thiserror::Error;

use crate::domain::a001_rental::filter::DateFilter;
use crate::domain::a001_rental::sync::UpdateStrategy;
use crate::shared::api_utils::ApiEndpoints;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_rentals_path")]
    pub rentals_path: String,
    #[serde(default = "default_accommodations_path")]
    pub accommodations_path: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub update_strategy: UpdateStrategy,
    #[serde(default)]
    pub date_filter: DateFilter,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            rentals_path: default_rentals_path(),
            accommodations_path: default_accommodations_path(),
        }
    }
}

fn default_rentals_path() -> String {
    "/api/rentals".to_string()
}

fn default_accommodations_path() -> String {
    "/api/accommodations".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Load the embedded configuration.
///
/// The page has no filesystem and no environment, so the bundled
/// `config.toml` is the only source.
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    log::debug!(
        "Config loaded: strategy={:?}, date_filter={:?}",
        config.view.update_strategy,
        config.view.date_filter
    );
    Ok(config)
}

impl Config {
    /// Resolve endpoint URLs against `api.base_url`, or against the page
    /// location when it is empty.
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(&self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.api.rentals_path, "/api/rentals");
        assert_eq!(config.api.accommodations_path, "/api/accommodations");
        assert_eq!(config.view.update_strategy, UpdateStrategy::OptimisticPatch);
        assert_eq!(config.view.date_filter, DateFilter::AllDates);
    }

    #[test]
    fn test_view_section_is_optional() {
        let config = parse_config("[api]\nbase_url = \"\"\n").unwrap();
        assert_eq!(config.view, ViewConfig::default());
        assert_eq!(config.api.rentals_path, "/api/rentals");
    }

    #[test]
    fn test_forced_refresh_with_day_filter() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://camping.example"

            [view]
            update_strategy = "forced_refresh"
            date_filter = "selected_day"
            "#,
        )
        .unwrap();
        assert_eq!(config.view.update_strategy, UpdateStrategy::ForcedRefresh);
        assert_eq!(config.view.date_filter, DateFilter::SelectedDay);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = parse_config("[api]\n[view]\nupdate_strategy = \"sometimes\"\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
