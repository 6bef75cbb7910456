use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::i18n::{DisplayLocale, translate};

/// Language toggle and designer signature
pub struct CardFooter;

pub struct CardFooterProps<'a> {
    pub locale: DisplayLocale,
    pub designer: &'a str,
}

/// Toggle, blank row, signature
pub const FOOTER_HEIGHT: u16 = 3;

const ACCENT: Color = Color::Rgb(25, 118, 210);

/// Key that flips the language, shown next to the toggle label
pub const TOGGLE_KEY: &str = "l";

impl Component<Action> for CardFooter {
    type Props<'a> = CardFooterProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut lines = vec![toggle_hint(props.locale), Line::default()];
        if !props.designer.is_empty() {
            lines.push(signature(props.locale, props.designer));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

fn toggle_hint(locale: DisplayLocale) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{TOGGLE_KEY}] "),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            locale.toggle_label(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn signature(locale: DisplayLocale, designer: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", translate("Designer", locale)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            translate(designer, locale).to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
}
