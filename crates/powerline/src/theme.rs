use std::fmt;

use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize,
};
use strum::IntoEnumIterator;

use crate::error::PromptError;

/// A terminal palette index (0-15 for the classic palette, up to 255 otherwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub bg: Color,
    pub fg: Color,
}

impl ColorPair {
    pub const fn new(bg: u8, fg: u8) -> Self {
        Self {
            bg: Color(bg),
            fg: Color(fg),
        }
    }
}

/// Colors for segments made of several parts joined by a thin separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTriplet {
    pub bg: Color,
    pub fg: Color,
    pub sep_fg: Color,
}

impl ColorTriplet {
    pub const fn new(bg: u8, fg: u8, sep_fg: u8) -> Self {
        Self {
            bg: Color(bg),
            fg: Color(fg),
            sep_fg: Color(sep_fg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitColors {
    pub clean: ColorPair,
    pub dirty: ColorPair,
}

/// Color assignments for every role a segment can be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub shell_bg: Color,
    pub auth: ColorPair,
    pub kitchen: ColorPair,
    pub time: ColorPair,
    pub remote: ColorPair,
    pub home: ColorPair,
    pub path: ColorTriplet,
    pub git: GitColors,
    pub lock: ColorPair,
    pub error: ColorPair,
}

impl Theme {
    pub const SOLARIZED_DARK: Theme = Theme {
        shell_bg: Color(0),
        auth: ColorPair::new(11, 0),
        kitchen: ColorPair::new(13, 0),
        time: ColorPair::new(10, 0),
        remote: ColorPair::new(5, 7),
        home: ColorPair::new(10, 0),
        path: ColorTriplet::new(8, 12, 0),
        git: GitColors {
            clean: ColorPair::new(14, 0),
            dirty: ColorPair::new(2, 0),
        },
        lock: ColorPair::new(4, 7),
        error: ColorPair::new(1, 7),
    };

    pub const SOLARIZED_DARK_FULL: Theme = Theme {
        shell_bg: Color(0),
        auth: ColorPair::new(11, 0),
        kitchen: ColorPair::new(13, 0),
        time: ColorPair::new(7, 0),
        remote: ColorPair::new(5, 7),
        home: ColorPair::new(10, 0),
        path: ColorTriplet::new(8, 15, 7),
        git: GitColors {
            clean: ColorPair::new(10, 0),
            dirty: ColorPair::new(9, 0),
        },
        lock: ColorPair::new(4, 7),
        error: ColorPair::new(1, 7),
    };
}

impl Default for Theme {
    fn default() -> Self {
        ThemePreset::default().theme()
    }
}

/// The closed set of built-in themes
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ThemePreset {
    #[default]
    SolarizedDark,
    SolarizedDarkFull,
}

impl ThemePreset {
    pub fn theme(self) -> Theme {
        match self {
            Self::SolarizedDark => Theme::SOLARIZED_DARK,
            Self::SolarizedDarkFull => Theme::SOLARIZED_DARK_FULL,
        }
    }

    /// Look up a preset by its kebab-case name
    pub fn from_name(name: &str) -> Result<Self, PromptError> {
        name.parse().map_err(|_err| PromptError::UnknownTheme(name.to_string()))
    }

    pub fn list_themes() -> Vec<String> {
        let mut themes: Vec<String> = Self::iter().map(|preset| preset.to_string()).collect();
        themes.sort();
        themes
    }
}

/// Glyphs drawn by the segments and the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub lock: &'static str,
    pub ellipsis: &'static str,
    pub clock: &'static str,
    pub separator: &'static str,
    pub separator_thin: &'static str,
    pub ahead: &'static str,
    pub behind: &'static str,
    pub untracked: &'static str,
}

impl Symbols {
    pub const POWERLINE: Symbols = Symbols {
        lock: "\u{e0a2}",
        ellipsis: "\u{2026}",
        clock: "\u{262f}",
        separator: "\u{e0b0}",
        separator_thin: "\u{e0b1}",
        ahead: "\u{21e7}",
        behind: "\u{21e9}",
        untracked: "\u{271a}",
    };
}

impl Default for Symbols {
    fn default() -> Self {
        Self::POWERLINE
    }
}
