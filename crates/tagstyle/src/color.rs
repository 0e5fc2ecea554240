//! Terminal color palette.
//!
//! Only the eight standard ANSI colors are supported. Each maps to a fixed
//! SGR code for foreground and background use.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::{StyleAttribute, StyleError};

/// One of the eight standard terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

static COLORS: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "white" => Color::White,
};

/// SGR reset code for the foreground color.
pub const FOREGROUND_RESET: u8 = 39;
/// SGR reset code for the background color.
pub const BACKGROUND_RESET: u8 = 49;

impl Color {
    /// All palette colors, in SGR code order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Look up a color by name.
    ///
    /// Names are matched exactly (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstyle::Color;
    ///
    /// assert_eq!(Color::from_name("yellow"), Some(Color::Yellow));
    /// assert_eq!(Color::from_name("orange"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        COLORS.get(name).copied()
    }

    /// The palette name of this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    fn index(self) -> u8 {
        self as u8
    }

    /// SGR code that sets this color as foreground (30-37).
    pub fn foreground_code(self) -> u8 {
        30 + self.index()
    }

    /// SGR code that sets this color as background (40-47).
    pub fn background_code(self) -> u8 {
        40 + self.index()
    }

    /// Parse a foreground color, reporting failures against the foreground.
    pub(crate) fn parse_foreground(name: &str) -> Result<Self, StyleError> {
        Self::from_name(name).ok_or_else(|| StyleError::invalid(StyleAttribute::Foreground, name))
    }

    /// Parse a background color, reporting failures against the background.
    pub(crate) fn parse_background(name: &str) -> Result<Self, StyleError> {
        Self::from_name(name).ok_or_else(|| StyleError::invalid(StyleAttribute::Background, name))
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_foreground(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
