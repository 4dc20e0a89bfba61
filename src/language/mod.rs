pub mod dutch;
pub mod english;
pub mod strings;
mod tokens;

use crate::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

// Re-export the main types for convenience
pub use dutch::DutchParser;
pub use english::EnglishParser;
pub use strings::{EmbeddedStrings, LocalizedStringProvider};

/// Free-text clock phrase to time of day.
pub trait TimeParser {
    /// `None` for empty input or when no phrasing matches; never a partial result.
    fn parse(&self, text: &str) -> Option<TimeOfDay>;
}

/// Time of day to the phrase a speaker of the language would use.
///
/// Output fed back through the same language's [`TimeParser`] yields the
/// original time on the 12-hour dial.
pub trait PhraseFormatter {
    fn phrase(&self, time: TimeOfDay) -> String;
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    Dutch,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Dutch, Language::English];

    /// Two-letter code, as used for string tables and locales.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Dutch => "nl",
            Language::English => "en",
        }
    }

    /// Regional locales offered for voice output.
    pub fn locales(&self) -> &'static [&'static str] {
        match self {
            Language::Dutch => &["nl-NL", "nl-BE"],
            Language::English => &["en-US", "en-GB"],
        }
    }

    pub fn default_locale(&self) -> &'static str {
        self.locales()[0]
    }

    pub fn parser(&self) -> &'static dyn TimeParser {
        match self {
            Language::Dutch => &DutchParser,
            Language::English => &EnglishParser,
        }
    }

    pub fn formatter(&self) -> &'static dyn PhraseFormatter {
        match self {
            Language::Dutch => &DutchParser,
            Language::English => &EnglishParser,
        }
    }

    pub fn parse(&self, text: &str) -> Option<TimeOfDay> {
        self.parser().parse(text)
    }

    pub fn phrase(&self, time: TimeOfDay) -> String {
        self.formatter().phrase(time)
    }
}
