use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use super::breakpoint::{Breakpoint, flow_pair};
use crate::action::Action;
use crate::i18n::TextDirection;

pub struct CardHeader;

pub struct CardHeaderProps<'a> {
    /// Already translated
    pub city: &'a str,
    pub date_time: &'a str,
    pub temperature: Option<i32>,
    pub breakpoint: Breakpoint,
    pub text_direction: TextDirection,
}

/// Rows taken by the header at each breakpoint
pub fn header_height(breakpoint: Breakpoint) -> u16 {
    match breakpoint {
        Breakpoint::Narrow => 2,
        Breakpoint::Wide => 6,
    }
}

fn gradient_colors(temp: Option<i32>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        Some(t) if t < 15 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        Some(t) if t < 25 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        Some(t) if t < 35 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // Gray (no data)
            ArtColor::rgb(220, 220, 220),
        ),
    }
}

pub(super) fn gradient(temp: Option<i32>) -> Fill {
    let (start, end) = gradient_colors(temp);
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for CardHeader {
    type Props<'a> = CardHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let date_width = props.date_time.chars().count() as u16 + 2;
        let (city_area, date_area) = match props.breakpoint {
            Breakpoint::Narrow => flow_pair(
                area,
                props.breakpoint,
                props.text_direction,
                Constraint::Length(1),
                Constraint::Length(1),
            ),
            Breakpoint::Wide => flow_pair(
                area,
                props.breakpoint,
                props.text_direction,
                Constraint::Fill(1),
                Constraint::Length(date_width),
            ),
        };

        render_city(frame, city_area, &props);

        // Date sits on the city's baseline in a row, under it in a column
        let date_area = match props.breakpoint {
            Breakpoint::Narrow => date_area,
            Breakpoint::Wide => {
                Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .split(date_area)[0]
            }
        };
        let date = Line::from(Span::styled(
            props.date_time.to_string(),
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(
            Paragraph::new(date).alignment(Alignment::Center),
            date_area,
        );
    }
}

fn render_city(frame: &mut Frame, area: Rect, props: &CardHeaderProps<'_>) {
    if props.city.is_empty() {
        return;
    }

    match props.breakpoint {
        Breakpoint::Narrow => {
            let line = Line::from(Span::styled(
                props.city.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }
        Breakpoint::Wide => {
            let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(gradient(props.temperature));
            frame.render_widget(ArtBox::new(&renderer, props.city), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_header_is_compact() {
        assert!(header_height(Breakpoint::Narrow) < header_height(Breakpoint::Wide));
    }
}
