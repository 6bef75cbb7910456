//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::config::{DEFAULT_LAT, DEFAULT_LON};
use crate::i18n::DisplayLocale;

/// Current conditions, already converted to display units
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub description: String,
    pub temp: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub icon_url: Option<String>,
}

impl WeatherSnapshot {
    /// Icon code recovered from `icon_url` (e.g. `01d`)
    pub fn icon_code(&self) -> Option<&str> {
        let url = self.icon_url.as_deref()?;
        let file = url.rsplit('/').next()?;
        file.strip_suffix("@2x.png")
    }
}

/// A geographic coordinate pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
        }
    }
}

/// Mount state of the card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Lifecycle {
    /// Not yet initialized; the mount action has not run
    #[default]
    Pending,
    Mounted,
    /// Torn down; late task results are dropped
    Unmounted,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Location", label = "Coordinates", debug_fmt)]
    pub coordinates: Coordinates,

    /// Weather lifecycle: Empty → Loading → Loaded. A failed fetch stays in Loading.
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub weather: DataResource<WeatherSnapshot>,

    #[debug(section = "Locale", label = "Language", debug_fmt)]
    pub locale: DisplayLocale,

    /// Date line, formatted for `locale`
    #[debug(section = "Locale", label = "Date")]
    pub date_time: String,

    #[debug(section = "Card", label = "Lifecycle", debug_fmt)]
    pub lifecycle: Lifecycle,

    /// Name shown in the footer signature
    #[debug(skip)]
    pub designer: String,
}

impl AppState {
    /// Create state for the given coordinates
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            weather: DataResource::Empty,
            locale: DisplayLocale::default(),
            date_time: String::new(),
            lifecycle: Lifecycle::Pending,
            designer: String::new(),
        }
    }

    pub fn with_designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.weather.data()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Coordinates::default())
    }
}
