//! Widget configuration

use serde::{Deserialize, Serialize};

use crate::state::Coordinates;

/// Sana'a, Yemen
pub const DEFAULT_LAT: f64 = 15.35;
pub const DEFAULT_LON: f64 = 44.2;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_ICON_HOST: &str = "http://openweathermap.org";
pub const DEFAULT_DESIGNER: &str = "Mohamed Alssadi";

/// Everything the fetcher and the card need that is not user input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Current-weather API base URL; `/weather` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Host serving condition icons
    #[serde(default = "default_icon_host")]
    pub icon_host: String,

    #[serde(default)]
    pub coordinates: Coordinates,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_designer")]
    pub designer: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_icon_host() -> String {
    DEFAULT_ICON_HOST.to_string()
}

fn default_designer() -> String {
    DEFAULT_DESIGNER.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            icon_host: default_icon_host(),
            coordinates: Coordinates::default(),
            api_key: String::new(),
            designer: default_designer(),
        }
    }
}

impl WidgetConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// False when no usable credential was supplied; every fetch would 401
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Full current-weather endpoint
    pub fn weather_url(&self) -> String {
        format!("{}/weather", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_sanaa() {
        let config = WidgetConfig::default();
        assert_eq!(config.coordinates.lat, 15.35);
        assert_eq!(config.coordinates.lon, 44.2);
        assert_eq!(
            config.weather_url(),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:9000/"}"#).unwrap();
        assert_eq!(config.weather_url(), "http://localhost:9000/weather");
        assert_eq!(config.icon_host, DEFAULT_ICON_HOST);
        assert_eq!(config.designer, DEFAULT_DESIGNER);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn missing_or_blank_key_is_reported() {
        assert!(!WidgetConfig::default().has_api_key());
        assert!(!WidgetConfig::default().with_api_key("   ").has_api_key());
        assert!(WidgetConfig::default().with_api_key("abc123").has_api_key());
    }
}
