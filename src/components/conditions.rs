use artbox::{Alignment as ArtAlignment, Renderer, fonts, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use super::breakpoint::{Breakpoint, flow_pair};
use super::card_header::gradient;
use crate::action::Action;
use crate::art::{self, CloudSize};
use crate::i18n::{DisplayLocale, translate};
use crate::state::WeatherSnapshot;

/// Temperature, description, min/max and the decorative cloud
pub struct Conditions;

pub struct ConditionsProps<'a> {
    /// `None` until the fetch succeeds
    pub snapshot: Option<&'a WeatherSnapshot>,
    pub locale: DisplayLocale,
    pub breakpoint: Breakpoint,
}

/// Rows for the big temperature; FIGlet picks the tallest font that fits
const WIDE_TEMP_ROWS: u16 = 6;
/// temperature + description + spacer + min/max, at the narrow breakpoint
const NARROW_TEXT_ROWS: u16 = 4;
const GLYPH_WIDTH: u16 = 3;

/// Rows the block needs at each breakpoint
pub fn conditions_height(breakpoint: Breakpoint) -> u16 {
    let cloud = breakpoint.cloud_size().height();
    match breakpoint {
        Breakpoint::Narrow => NARROW_TEXT_ROWS + 1 + cloud,
        Breakpoint::Wide => (WIDE_TEMP_ROWS + 3).max(cloud),
    }
}

impl Component<Action> for Conditions {
    type Props<'a> = ConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let cloud = props.breakpoint.cloud_size();
        let cloud_constraint = match props.breakpoint {
            Breakpoint::Narrow => Constraint::Length(cloud.height() + 1),
            Breakpoint::Wide => Constraint::Length(cloud.width() + 2),
        };
        let (text_area, cloud_area) = flow_pair(
            area,
            props.breakpoint,
            props.locale.direction(),
            Constraint::Fill(1),
            cloud_constraint,
        );

        render_text(frame, text_area, &props);
        render_cloud(frame, cloud_area, cloud);
    }
}

fn text_alignment(props: &ConditionsProps<'_>) -> Alignment {
    if props.breakpoint.is_narrow() {
        Alignment::Center
    } else {
        props.locale.direction().alignment()
    }
}

fn render_text(frame: &mut Frame, area: Rect, props: &ConditionsProps<'_>) {
    let temp_rows = match props.breakpoint {
        Breakpoint::Narrow => 1,
        Breakpoint::Wide => WIDE_TEMP_ROWS,
    };
    let chunks = Layout::vertical([
        Constraint::Max(temp_rows), // Temperature + glyph
        Constraint::Length(1),      // Description
        Constraint::Length(1),      // Spacer
        Constraint::Length(1),      // Min | Max
    ])
    .flex(Flex::Center)
    .split(area);

    render_temperature(frame, chunks[0], props);

    let alignment = text_alignment(props);
    let description = props
        .snapshot
        .map(|s| translate(&s.description, props.locale))
        .unwrap_or_default();
    let description = Line::from(Span::styled(
        description.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(description).alignment(alignment), chunks[1]);

    frame.render_widget(
        Paragraph::new(min_max_line(props.snapshot, props.locale)).alignment(alignment),
        chunks[3],
    );
}

fn render_temperature(frame: &mut Frame, area: Rect, props: &ConditionsProps<'_>) {
    let glyph = props
        .snapshot
        .and_then(WeatherSnapshot::icon_code)
        .map(art::condition_glyph)
        .unwrap_or_default();

    match (props.breakpoint, props.snapshot) {
        (Breakpoint::Wide, Some(snapshot)) => {
            let (temp_area, glyph_area) = flow_pair(
                area,
                props.breakpoint,
                props.locale.direction(),
                Constraint::Fill(1),
                Constraint::Length(GLYPH_WIDTH),
            );
            let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(gradient(Some(snapshot.temp)));
            frame.render_widget(ArtBox::new(&renderer, &temperature_text(Some(snapshot))), temp_area);

            let glyph_row = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .split(glyph_area)[0];
            frame.render_widget(Paragraph::new(Line::from(glyph)), glyph_row);
        }
        _ => {
            let mut spans = vec![Span::styled(
                temperature_text(props.snapshot),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if !glyph.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::raw(glyph));
            }
            frame.render_widget(
                Paragraph::new(Line::from(spans)).alignment(text_alignment(props)),
                area,
            );
        }
    }
}

fn render_cloud(frame: &mut Frame, area: Rect, size: CloudSize) {
    let rows = Layout::vertical([Constraint::Length(size.height())])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(
        Paragraph::new(art::cloud(size)).alignment(Alignment::Center),
        rows[0],
    );
}

/// `27°`, or a bare `°` while nothing has loaded
pub fn temperature_text(snapshot: Option<&WeatherSnapshot>) -> String {
    match snapshot {
        Some(s) => format!("{}°", s.temp),
        None => "°".to_string(),
    }
}

/// `Min: 25 | Max: 30` in the active language; values blank before load
pub fn min_max_line(snapshot: Option<&WeatherSnapshot>, locale: DisplayLocale) -> Line<'static> {
    let (min, max) = match snapshot {
        Some(s) => (s.temp_min.to_string(), s.temp_max.to_string()),
        None => (String::new(), String::new()),
    };
    Line::from(vec![
        Span::raw(format!("{}: {}", translate("Min", locale), min)),
        Span::styled("  |  ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}: {}", translate("Max", locale), max)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn temperature_placeholder_before_load() {
        assert_eq!(temperature_text(None), "°");
        assert_eq!(temperature_text(Some(&aden())), "27°");
    }

    #[test]
    fn min_max_is_localized() {
        let snapshot = aden();
        assert_eq!(
            line_text(&min_max_line(Some(&snapshot), DisplayLocale::En)),
            "Min: 25  |  Max: 30"
        );
        assert_eq!(
            line_text(&min_max_line(Some(&snapshot), DisplayLocale::Ar)),
            "الصغرى: 25  |  الكبرى: 30"
        );
        assert_eq!(
            line_text(&min_max_line(None, DisplayLocale::En)),
            "Min:   |  Max: "
        );
    }

    #[test]
    fn narrow_block_is_taller() {
        assert!(conditions_height(Breakpoint::Narrow) > NARROW_TEXT_ROWS);
        assert!(conditions_height(Breakpoint::Wide) >= WIDE_TEMP_ROWS);
    }
}
