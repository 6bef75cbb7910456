//! Decorative cloud art and condition glyphs
//!
//! The cloud comes in two sizes picked by breakpoint. Condition glyphs map
//! OpenWeatherMap icon codes (`01d`, `10n`, ...) to a single symbol.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};

/// Light blue, matching the card's accent
pub const CLOUD_COLOR: Color = Color::Rgb(173, 216, 230);

const CLOUD_LARGE: &[&str] = &[
    "          .-~~~-.          ",
    "  .- ~ ~-(       )_ _      ",
    " /                    ~ -. ",
    "|                         |",
    " \\                      .' ",
    "   ~- . _____________ . -  ",
];

const CLOUD_SMALL: &[&str] = &[
    "   .--.    ",
    " .(    ).  ",
    "(___.__)__)",
];

/// Cloud sizes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudSize {
    Small,
    Large,
}

impl CloudSize {
    fn lines(self) -> &'static [&'static str] {
        match self {
            CloudSize::Small => CLOUD_SMALL,
            CloudSize::Large => CLOUD_LARGE,
        }
    }

    pub fn height(self) -> u16 {
        self.lines().len() as u16
    }

    pub fn width(self) -> u16 {
        self.lines()
            .iter()
            .map(|line| line.chars().count() as u16)
            .max()
            .unwrap_or(0)
    }
}

pub fn cloud(size: CloudSize) -> Text<'static> {
    let style = Style::default().fg(CLOUD_COLOR);
    size.lines()
        .iter()
        .map(|line| Line::styled(*line, style))
        .collect::<Vec<_>>()
        .into()
}

/// Glyph for an icon code; unknown codes get a generic thermometer
pub fn condition_glyph(icon_code: &str) -> &'static str {
    let night = icon_code.ends_with('n');
    match icon_code.get(..2).unwrap_or_default() {
        "01" if night => "\u{1f319}",
        "01" => "\u{2600}\u{fe0f}",
        "02" => "\u{26c5}",
        "03" | "04" => "\u{2601}\u{fe0f}",
        "09" => "\u{1f327}\u{fe0f}",
        "10" => "\u{1f326}\u{fe0f}",
        "11" => "\u{26c8}\u{fe0f}",
        "13" => "\u{2744}\u{fe0f}",
        "50" => "\u{1f32b}\u{fe0f}",
        _ => "\u{1f321}\u{fe0f}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_day_and_night() {
        assert_eq!(condition_glyph("01d"), "\u{2600}\u{fe0f}");
        assert_eq!(condition_glyph("01n"), "\u{1f319}");
        assert_eq!(condition_glyph("04n"), condition_glyph("03d"));
        assert_eq!(condition_glyph("x"), "\u{1f321}\u{fe0f}");
    }

    #[test]
    fn cloud_sizes_differ() {
        assert!(CloudSize::Large.height() > CloudSize::Small.height());
        assert!(CloudSize::Large.width() > CloudSize::Small.width());
        assert_eq!(cloud(CloudSize::Small).lines.len(), 3);
    }
}
