//! Action and state tests using TestHarness

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_card::{
    action::Action,
    components::{Component, WeatherCard, WeatherCardProps},
    effect::Effect,
    i18n::DisplayLocale,
    reducer::reducer,
    state::{AppState, Coordinates, Lifecycle, WeatherSnapshot},
};

fn aden() -> WeatherSnapshot {
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
fn test_mount_issues_single_fetch() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().weather.is_empty());

    let result = store.dispatch(Action::WidgetMount);
    assert!(result.changed, "State should change");
    assert!(store.state().weather.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        result.effects[0],
        Effect::FetchWeather { coordinates } if coordinates == Coordinates::default()
    ));

    let again = store.dispatch(Action::WidgetMount);
    assert!(!again.changed);
    assert!(again.effects.is_empty());
}

#[test]
fn test_snapshot_written_whole() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::WidgetMount);
    store.dispatch(Action::WeatherDidLoad(aden()));

    assert!(store.state().weather.is_loaded());
    assert_eq!(store.state().snapshot(), Some(&aden()));
}

#[test]
fn test_toggle_locale_round_trip() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::WidgetMount);

    assert_eq!(store.state().locale, DisplayLocale::Ar);
    store.dispatch(Action::UiToggleLocale);
    assert_eq!(store.state().locale, DisplayLocale::En);
    store.dispatch(Action::UiToggleLocale);
    assert_eq!(store.state().locale, DisplayLocale::Ar);
    assert!(store.state().date_time.ends_with(" م"));
}

#[test]
fn test_quit_unmounts() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::WidgetMount);
    store.dispatch(Action::Quit);

    assert_eq!(store.state().lifecycle, Lifecycle::Unmounted);

    let late = store.dispatch(Action::WeatherDidLoad(aden()));
    assert!(!late.changed);
    assert!(store.state().snapshot().is_none());
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherCard;

    let actions = harness.send_keys::<NumericComponentId, _, _>("l", |state, event| {
        let props = WeatherCardProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::UiToggleLocale);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherCard;

    let actions = harness.send_keys::<NumericComponentId, _, _>("l q t", |state, event| {
        let props = WeatherCardProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherCard;

    let actions = harness.send_keys::<NumericComponentId, _, _>("r u /", |state, event| {
        let props = WeatherCardProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(WeatherSnapshot::default());
    let toggle = Action::UiToggleLocale;
    let quit = Action::Quit;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(quit.category(), None);

    assert!(did_load.is_weather_did());
    assert!(toggle.is_ui());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![Action::WidgetMount, Action::WeatherDidLoad(aden())];

    assert_emitted!(actions, Action::WidgetMount);
    assert_emitted!(actions, Action::WeatherDidLoad(_));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidFail(_));
}

#[test]
fn test_designer_is_carried_in_state() {
    let state = AppState::new(Coordinates::default()).with_designer("Someone");
    assert_eq!(state.designer, "Someone");
    assert_eq!(state.lifecycle, Lifecycle::Pending);
}
