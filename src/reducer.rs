//! Reducer - (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::i18n;
use crate::state::{AppState, Lifecycle};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lifecycle =====
        Action::WidgetMount => {
            if state.lifecycle != Lifecycle::Pending {
                return DispatchResult::unchanged();
            }
            state.lifecycle = Lifecycle::Mounted;
            state.date_time = i18n::format_now(state.locale);
            state.weather = DataResource::Loading;
            DispatchResult::changed_with(Effect::FetchWeather {
                coordinates: state.coordinates,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(snapshot) => {
            if !state.is_mounted() || state.weather.is_loaded() {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(snapshot);
            DispatchResult::changed()
        }

        // Failures keep the card in its loading state with no feedback.
        Action::WeatherDidFail(_) | Action::WeatherDidCancel => DispatchResult::unchanged(),

        // ===== UI actions =====
        Action::UiToggleLocale => {
            let (locale, date_time) = i18n::toggle_locale(state.locale, &chrono::Local::now());
            state.locale = locale;
            state.date_time = date_time;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Quit => {
            state.lifecycle = Lifecycle::Unmounted;
            DispatchResult::changed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DisplayLocale;
    use crate::state::WeatherSnapshot;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            city_name: "Aden".into(),
            description: "clear sky".into(),
            temp: 27,
            temp_min: 25,
            temp_max: 30,
            icon_url: Some("http://openweathermap.org/img/wn/01d@2x.png".into()),
        }
    }

    #[test]
    fn test_mount_starts_fetch() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::WidgetMount);

        assert!(result.changed);
        assert!(state.weather.is_loading());
        assert_eq!(state.lifecycle, Lifecycle::Mounted);
        assert!(state.date_time.ends_with(" م"));
        assert_eq!(result.effects.len(), 1);
        assert!(matches!(result.effects[0], Effect::FetchWeather { .. }));
    }

    #[test]
    fn test_mount_runs_once() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetMount);

        let result = reducer(&mut state, Action::WidgetMount);

        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetMount);

        let result = reducer(&mut state, Action::WeatherDidLoad(snapshot()));

        assert!(result.changed);
        assert_eq!(state.snapshot(), Some(&snapshot()));
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetMount);
        reducer(&mut state, Action::WeatherDidLoad(snapshot()));

        let other = WeatherSnapshot {
            city_name: "Sanaa".into(),
            ..snapshot()
        };
        let result = reducer(&mut state, Action::WeatherDidLoad(other));

        assert!(!result.changed);
        assert_eq!(state.snapshot().map(|s| s.city_name.as_str()), Some("Aden"));
    }

    #[test]
    fn test_failure_keeps_loading() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetMount);

        let result = reducer(&mut state, Action::WeatherDidFail("connection refused".into()));

        assert!(!result.changed);
        assert!(state.weather.is_loading());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_late_response_after_quit_is_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetMount);
        reducer(&mut state, Action::Quit);

        let result = reducer(&mut state, Action::WeatherDidLoad(snapshot()));

        assert!(!result.changed);
        assert!(state.snapshot().is_none());
        assert_eq!(state.lifecycle, Lifecycle::Unmounted);
    }

    #[test]
    fn test_toggle_locale_restamps_date() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetMount);

        reducer(&mut state, Action::UiToggleLocale);
        assert_eq!(state.locale, DisplayLocale::En);
        assert!(!state.date_time.ends_with(" م"));

        reducer(&mut state, Action::UiToggleLocale);
        assert_eq!(state.locale, DisplayLocale::Ar);
        assert!(state.date_time.ends_with(" م"));
    }
}
