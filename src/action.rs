//! Actions - everything that can change the card's state

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Widget lifecycle =====
    /// One-shot initialization: stamp the date and start the fetch
    WidgetMount,

    // ===== Weather category =====
    /// Result: snapshot built from a successful response
    WeatherDidLoad(WeatherSnapshot),

    /// Result: network, status or payload failure (already logged)
    WeatherDidFail(String),

    /// Result: the request was cancelled during teardown
    WeatherDidCancel,

    // ===== UI category =====
    /// Switch between Arabic and English
    UiToggleLocale,

    // ===== Uncategorized (global) =====
    /// Tear the card down and exit
    Quit,
}
