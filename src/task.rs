//! The fetch task and the cancellation scope it runs under

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::api::WeatherClient;
use crate::state::Coordinates;

/// Owns the root cancellation token for the card's lifetime.
///
/// Each fetch gets a child token. Dropping the scope (teardown) cancels
/// every outstanding child, so there is no shared mutable handle to reset.
#[derive(Debug, Default)]
pub struct FetchScope {
    root: CancellationToken,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for one fetch; cancelled with the scope
    pub fn child(&self) -> CancellationToken {
        self.root.child_token()
    }

    pub fn is_cancelled(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

/// Run one fetch and map its outcome to the action the reducer expects
pub async fn weather_task(
    client: WeatherClient,
    coordinates: Coordinates,
    cancel: CancellationToken,
) -> Action {
    match client.fetch_current(coordinates, &cancel).await {
        Ok(snapshot) => {
            info!(city = %snapshot.city_name, temp = snapshot.temp, "weather loaded");
            Action::WeatherDidLoad(snapshot)
        }
        Err(err) if err.is_cancelled() => {
            debug!("weather request cancelled before completion");
            Action::WeatherDidCancel
        }
        Err(err) => {
            warn!(error = %err, "weather fetch failed");
            Action::WeatherDidFail(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_scope_cancels_children() {
        let scope = FetchScope::new();
        let child = scope.child();
        assert!(!child.is_cancelled());

        drop(scope);

        assert!(child.is_cancelled());
    }

    #[test]
    fn cancelling_a_child_leaves_scope_alive() {
        let scope = FetchScope::new();
        let child = scope.child();
        child.cancel();

        assert!(!scope.is_cancelled());
        assert!(!scope.child().is_cancelled());
    }
}
