//! Color themes for feedback tags

use crate::core::Tag;
use colored::Colorize;
use std::fmt;

/// Color mode requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Light when playing on a terminal, mono otherwise
    #[default]
    Auto,
    Mono,
    Dark,
    Light,
    Grey,
}

impl ColorMode {
    /// Create a color mode from its name
    ///
    /// Accepts the full name or its first letter, case-insensitively
    /// (`gray` is accepted too). Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use mind::output::ColorMode;
    ///
    /// assert_eq!(ColorMode::from_name("Dark"), Some(ColorMode::Dark));
    /// assert_eq!(ColorMode::from_name("l"), Some(ColorMode::Light));
    /// assert_eq!(ColorMode::from_name("purple"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a" | "auto" => Some(Self::Auto),
            "m" | "mono" => Some(Self::Mono),
            "d" | "dark" => Some(Self::Dark),
            "l" | "light" => Some(Self::Light),
            "g" | "grey" | "gray" => Some(Self::Grey),
            _ => None,
        }
    }
}

/// Palette actually used for rendering, after `auto` has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Mono,
    Dark,
    Light,
    Grey,
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mono => "mono",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Grey => "grey",
        };
        f.write_str(name)
    }
}

/// Maps feedback tags to display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    palette: Palette,
}

impl ColorTheme {
    /// Resolve `mode` into a theme; `interactive` decides what `auto` means
    #[must_use]
    pub fn resolve(mode: ColorMode, interactive: bool) -> Self {
        let palette = match mode {
            ColorMode::Auto if interactive => Palette::Light,
            ColorMode::Auto | ColorMode::Mono => Palette::Mono,
            ColorMode::Dark => Palette::Dark,
            ColorMode::Light => Palette::Light,
            ColorMode::Grey => Palette::Grey,
        };
        Self::new(palette)
    }

    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Whether rendering emits ANSI escapes
    ///
    /// The caller forces `colored` on when this is true, since the palette
    /// was picked explicitly and must not depend on stdout detection.
    #[must_use]
    pub fn uses_color(&self) -> bool {
        self.palette != Palette::Mono
    }

    /// Render one tag as its letter in the theme's colors
    #[must_use]
    pub fn render(&self, tag: Tag) -> String {
        let letter = tag.letter().to_string();
        let styled = match (self.palette, tag) {
            (Palette::Mono, _) => return letter,
            (Palette::Dark, Tag::Red) => letter.red(),
            (Palette::Dark, Tag::Yellow) => letter.yellow(),
            (Palette::Dark, Tag::Green) => letter.green(),
            (Palette::Light, Tag::Red) => letter.red().bold(),
            (Palette::Light, Tag::Yellow) => letter.yellow().bold(),
            (Palette::Light, Tag::Green) => letter.green().bold(),
            (Palette::Grey, Tag::Red) => letter.black().bold(),
            (Palette::Grey, Tag::Yellow) => letter.white(),
            (Palette::Grey, Tag::Green) => letter.white().bold(),
        };
        styled.to_string()
    }
}
