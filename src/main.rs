//! Weather card - bilingual current-weather widget

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_card::action::Action;
use weather_card::api::WeatherClient;
use weather_card::components::{Component, WeatherCard, WeatherCardProps};
use weather_card::config::{DEFAULT_DESIGNER, WidgetConfig};
use weather_card::effect::Effect;
use weather_card::logging;
use weather_card::reducer::reducer;
use weather_card::state::AppState;
use weather_card::task::{FetchScope, weather_task};

/// Current weather for Sana'a in Arabic or English
#[derive(Parser, Debug)]
#[command(name = "weather-card")]
#[command(about = "A bilingual current-weather card for the terminal")]
struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Write diagnostics here instead of the default temp-dir log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Name shown in the footer signature
    #[arg(long, default_value = DEFAULT_DESIGNER)]
    designer: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum CardComponentId {
    Card,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum CardContext {
    Main,
}

impl EventRoutingState<CardComponentId, CardContext> for AppState {
    fn focused(&self) -> Option<CardComponentId> {
        Some(CardComponentId::Card)
    }

    fn modal(&self) -> Option<CardComponentId> {
        None
    }

    fn binding_context(&self, _id: CardComponentId) -> CardContext {
        CardContext::Main
    }

    fn default_context(&self) -> CardContext {
        CardContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        log_file,
        designer,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config = WidgetConfig {
        designer,
        ..WidgetConfig::default()
    }
    .with_api_key(api_key);
    if !config.has_api_key() {
        warn!("no OpenWeatherMap API key (--api-key or OPENWEATHER_API_KEY), the card will stay blank");
    }
    info!(lat = config.coordinates.lat, lon = config.coordinates.lon, "starting weather card");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let coordinates = config.coordinates;
    let state_designer = config.designer.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(coordinates).with_designer(state_designer))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let scope = FetchScope::new();
    let client = WeatherClient::new(config);
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        replay_actions,
        client,
        scope.child(),
    )
    .await;

    // Teardown: anything still in flight resolves as cancelled
    drop(scope);

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    info!("weather card closed");
    Ok(())
}

struct CardUi {
    card: WeatherCard,
}

impl CardUi {
    fn new() -> Self {
        Self { card: WeatherCard }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<CardComponentId>,
    ) {
        event_ctx.set_component_area(CardComponentId::Card, area);

        let props = WeatherCardProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.card.render(frame, area, props);
    }

    fn handle_card_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherCardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.card.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    client: WeatherClient,
    cancel: CancellationToken,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(CardUi::new()));
    let mut bus: EventBus<AppState, Action, CardComponentId, CardContext> = EventBus::new();
    let keybindings: Keybindings<CardContext> = Keybindings::new();

    let ui_card = Rc::clone(&ui);
    bus.register(CardComponentId::Card, move |event, state| {
        ui_card.borrow_mut().handle_card_event(&event.kind, state)
    });

    // Re-render on terminal resize; the breakpoint is recomputed from the new width
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WidgetMount),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client, &cancel),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    client: &WeatherClient,
    cancel: &CancellationToken,
) {
    match effect {
        Effect::FetchWeather { coordinates } => {
            let client = client.clone();
            let cancel = cancel.child_token();
            ctx.tasks()
                .spawn("weather", weather_task(client, coordinates, cancel));
        }
    }
}
