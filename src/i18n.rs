//! Display locale, translations and date formatting
//!
//! Lookups are total: a key missing from the active dictionary renders as
//! itself, so untranslated city names and descriptions still show up.

use chrono::{DateTime, Local, Locale, TimeZone};
use ratatui::layout::Alignment;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// UI language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DisplayLocale {
    #[default]
    Ar,
    En,
}

/// Reading order of the active locale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    /// Alignment for free-standing text lines
    pub fn alignment(self) -> Alignment {
        match self {
            TextDirection::Rtl => Alignment::Right,
            TextDirection::Ltr => Alignment::Left,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

const AR_DATE_PATTERN: &str = "%A | %d / %m / %Y م";
const EN_DATE_PATTERN: &str = "%A | %d / %m / %Y";

impl DisplayLocale {
    pub fn toggle(self) -> Self {
        match self {
            DisplayLocale::Ar => DisplayLocale::En,
            DisplayLocale::En => DisplayLocale::Ar,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DisplayLocale::Ar => "ar",
            DisplayLocale::En => "en",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            DisplayLocale::Ar => TextDirection::Rtl,
            DisplayLocale::En => TextDirection::Ltr,
        }
    }

    /// strftime pattern for the date line. Arabic carries a trailing era marker.
    pub fn date_pattern(self) -> &'static str {
        match self {
            DisplayLocale::Ar => AR_DATE_PATTERN,
            DisplayLocale::En => EN_DATE_PATTERN,
        }
    }

    fn chrono_locale(self) -> Locale {
        match self {
            DisplayLocale::Ar => Locale::ar_YE,
            DisplayLocale::En => Locale::en_US,
        }
    }

    /// Label of the language toggle: names the language you would switch to
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayLocale::Ar => "الإنجليزية",
            DisplayLocale::En => "Arabic",
        }
    }
}

/// Format `when` with the locale's date pattern and weekday names.
///
/// Arabic output uses Arabic-Indic digits throughout.
pub fn format_date<Tz>(locale: DisplayLocale, when: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let formatted = when
        .format_localized(locale.date_pattern(), locale.chrono_locale())
        .to_string();
    match locale {
        DisplayLocale::Ar => arabic_indic_digits(&formatted),
        DisplayLocale::En => formatted,
    }
}

/// Replace ASCII digits with U+0660..=U+0669
fn arabic_indic_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(0x0660 + d))
                .unwrap_or(c)
        })
        .collect()
}

/// Current local date formatted for `locale`
pub fn format_now(locale: DisplayLocale) -> String {
    format_date(locale, &Local::now())
}

/// Flip the locale and re-stamp the date line for the new one
pub fn toggle_locale<Tz>(current: DisplayLocale, now: &DateTime<Tz>) -> (DisplayLocale, String)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let next = current.toggle();
    (next, format_date(next, now))
}

/// Look `key` up in the locale's dictionary, falling back to the key itself
pub fn translate<'a>(key: &'a str, locale: DisplayLocale) -> &'a str {
    match locale {
        DisplayLocale::En => key,
        DisplayLocale::Ar => arabic(key).unwrap_or(key),
    }
}

fn arabic(key: &str) -> Option<&'static str> {
    let text = match key {
        // Labels
        "Min" => "الصغرى",
        "Max" => "الكبرى",
        "Designer" => "المصمم",
        "toggle language" => "تغيير اللغة",
        "quit" => "خروج",

        // Names
        "Mohamed Alssadi" => "محمد السعدي",

        // Cities
        "Sanaa" | "Sana'a" => "صنعاء",
        "Aden" => "عدن",

        // Clear / clouds
        "clear sky" => "سماء صافية",
        "few clouds" => "غيوم قليلة",
        "scattered clouds" => "غيوم متفرقة",
        "broken clouds" => "غيوم متناثرة",
        "overcast clouds" => "غيوم ملبدة",

        // Rain / drizzle
        "light rain" => "مطر خفيف",
        "moderate rain" => "مطر معتدل",
        "heavy intensity rain" => "مطر غزير",
        "shower rain" => "زخات مطر",
        "light intensity shower rain" => "زخات مطر خفيفة",
        "rain" => "مطر",
        "light intensity drizzle" => "رذاذ خفيف",
        "drizzle" => "رذاذ",

        // Thunderstorm
        "thunderstorm" => "عاصفة رعدية",
        "thunderstorm with light rain" => "عاصفة رعدية مع مطر خفيف",
        "thunderstorm with rain" => "عاصفة رعدية مع مطر",

        // Snow
        "snow" => "ثلج",
        "light snow" => "ثلج خفيف",

        // Atmosphere
        "mist" => "ضباب خفيف",
        "haze" => "غبار خفيف",
        "fog" => "ضباب",
        "smoke" => "دخان",
        "dust" => "غبار",
        "sand" => "رمال",
        "sand/dust whirls" => "زوابع رملية",
        _ => return None,
    };
    Some(text)
}
