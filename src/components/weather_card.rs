use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::breakpoint::Breakpoint;
use super::card_footer::{FOOTER_HEIGHT, TOGGLE_KEY};
use super::card_header::header_height;
use super::conditions::conditions_height;
use super::{
    CardFooter, CardFooterProps, CardHeader, CardHeaderProps, Component, Conditions,
    ConditionsProps,
};
use crate::action::Action;
use crate::i18n::translate;
use crate::state::AppState;

/// Card never grows wider than this, however wide the terminal
pub const CARD_MAX_WIDTH: u16 = 96;

/// Props for WeatherCard - read-only view of state
pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: header, conditions, footer and key hints
#[derive(Default)]
pub struct WeatherCard;

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('l') | KeyCode::Char('t') => Some(Action::UiToggleLocale),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherCardProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let state = props.state;
        let breakpoint = Breakpoint::for_width(area.width);
        let locale = state.locale;
        let snapshot = state.snapshot();

        let card_area = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .split(chunks[0])[0];
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let rows = Layout::vertical([
            Constraint::Length(header_height(breakpoint)),
            Constraint::Length(1), // Divider
            Constraint::Length(conditions_height(breakpoint)),
            Constraint::Length(1), // Divider
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .flex(Flex::Center)
        .split(inner);

        let city = snapshot
            .map(|s| translate(&s.city_name, locale))
            .unwrap_or_default();
        CardHeader.render(
            frame,
            rows[0],
            CardHeaderProps {
                city,
                date_time: &state.date_time,
                temperature: snapshot.map(|s| s.temp),
                breakpoint,
                text_direction: locale.direction(),
            },
        );
        render_divider(frame, rows[1]);

        Conditions.render(
            frame,
            rows[2],
            ConditionsProps {
                snapshot,
                locale,
                breakpoint,
            },
        );
        render_divider(frame, rows[3]);

        CardFooter.render(
            frame,
            rows[4],
            CardFooterProps {
                locale,
                designer: &state.designer,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new(TOGGLE_KEY, translate("toggle language", locale)),
                    StatusBarHint::new("q", translate("quit", locale)),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_divider(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::new()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
