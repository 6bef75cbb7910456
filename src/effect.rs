//! Effects - side effects declared by the reducer

use crate::state::Coordinates;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch current conditions for the given coordinates
    FetchWeather { coordinates: Coordinates },
}
