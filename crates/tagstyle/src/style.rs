//! Style types for tag markup.
//!
//! A Style combines a foreground color, a background color and a set of
//! text decorations, and knows how to wrap text in the matching SGR codes.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::color::{BACKGROUND_RESET, Color, FOREGROUND_RESET};
use crate::error::{StyleAttribute, StyleError};

/// A text decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Underline,
    Blink,
}

static DECORATIONS: phf::Map<&'static str, Decoration> = phf_map! {
    "bold" => Decoration::Bold,
    "underline" => Decoration::Underline,
    "blink" => Decoration::Blink,
};

impl Decoration {
    /// Look up a decoration by name.
    pub fn from_name(name: &str) -> Option<Self> {
        DECORATIONS.get(name).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decoration::Bold => "bold",
            Decoration::Underline => "underline",
            Decoration::Blink => "blink",
        }
    }

    /// SGR code that enables the decoration.
    pub fn set_code(self) -> u8 {
        match self {
            Decoration::Bold => 1,
            Decoration::Underline => 4,
            Decoration::Blink => 5,
        }
    }

    /// SGR code that disables the decoration.
    pub fn reset_code(self) -> u8 {
        match self {
            Decoration::Bold => 22,
            Decoration::Underline => 24,
            Decoration::Blink => 25,
        }
    }
}

impl FromStr for Decoration {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::invalid(StyleAttribute::Decoration, s))
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete style specification including colors and decorations.
///
/// Decorations keep the order they were added in; that order decides the
/// order of their SGR codes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    decorations: Vec<Decoration>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add a decoration. Adding one that is already present does nothing.
    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.insert(decoration);
        self
    }

    /// Build a style from attribute names, validating each one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstyle::{Color, Style};
    ///
    /// let style = Style::from_names(Some("black"), Some("yellow"), &[]).unwrap();
    /// assert_eq!(style.foreground(), Some(Color::Black));
    ///
    /// assert!(Style::from_names(Some("orange"), None, &[]).is_err());
    /// ```
    pub fn from_names(
        fg: Option<&str>,
        bg: Option<&str>,
        decorations: &[&str],
    ) -> Result<Self, StyleError> {
        let mut style = Style {
            fg: fg.map(Color::parse_foreground).transpose()?,
            bg: bg.map(Color::parse_background).transpose()?,
            decorations: Vec::new(),
        };
        for name in decorations {
            style.add_decoration(name)?;
        }
        Ok(style)
    }

    /// Parse a style from a string like "bold white on red".
    ///
    /// Supported syntax:
    /// - Decorations: `bold`, `underline`, `blink`
    /// - Foreground color: any palette name, e.g. `red`
    /// - Background color: `on` followed by a palette name, e.g. `on red`
    ///
    /// An empty string is a valid, empty style.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstyle::{Color, Style};
    ///
    /// let style = Style::parse("bold white on red").unwrap();
    /// assert_eq!(style.foreground(), Some(Color::White));
    /// assert_eq!(style.background(), Some(Color::Red));
    /// ```
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let mut style = Style::new();
        let mut words = input.split_whitespace();

        while let Some(word) = words.next() {
            if word == "on" {
                let color = words.next().unwrap_or_default();
                style.bg = Some(Color::parse_background(color)?);
                continue;
            }

            if let Some(decoration) = Decoration::from_name(word) {
                style.insert(decoration);
                continue;
            }

            style.fg = Some(Color::parse_foreground(word)?);
        }

        Ok(style)
    }

    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    /// Decorations in the order they were added.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.decorations.is_empty()
    }

    /// Set the foreground color by name.
    pub fn set_foreground(&mut self, name: &str) -> Result<(), StyleError> {
        self.fg = Some(Color::parse_foreground(name)?);
        Ok(())
    }

    /// Set the background color by name.
    pub fn set_background(&mut self, name: &str) -> Result<(), StyleError> {
        self.bg = Some(Color::parse_background(name)?);
        Ok(())
    }

    /// Add a decoration by name.
    pub fn add_decoration(&mut self, name: &str) -> Result<(), StyleError> {
        let decoration = name.parse::<Decoration>()?;
        self.insert(decoration);
        Ok(())
    }

    /// Remove a decoration by name. Removing an absent decoration does nothing.
    pub fn remove_decoration(&mut self, name: &str) -> Result<(), StyleError> {
        let decoration = name.parse::<Decoration>()?;
        self.decorations.retain(|d| *d != decoration);
        Ok(())
    }

    fn insert(&mut self, decoration: Decoration) {
        if !self.decorations.contains(&decoration) {
            self.decorations.push(decoration);
        }
    }

    /// SGR codes that open this style, then the codes that close it.
    fn codes(&self) -> (Vec<u8>, Vec<u8>) {
        let mut set = Vec::new();
        let mut reset = Vec::new();

        if let Some(fg) = self.fg {
            set.push(fg.foreground_code());
            reset.push(FOREGROUND_RESET);
        }
        if let Some(bg) = self.bg {
            set.push(bg.background_code());
            reset.push(BACKGROUND_RESET);
        }
        for decoration in &self.decorations {
            set.push(decoration.set_code());
            reset.push(decoration.reset_code());
        }

        (set, reset)
    }

    /// Wrap `text` in this style's escape sequences.
    ///
    /// A style with no attributes returns the text unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstyle::{Color, Style};
    ///
    /// let style = Style::new().fg(Color::Black).bg(Color::Yellow);
    /// assert_eq!(style.format("bad"), "\x1b[30;43mbad\x1b[39;49m");
    /// assert_eq!(Style::new().format("plain"), "plain");
    /// ```
    pub fn format(&self, text: &str) -> String {
        let (set, reset) = self.codes();
        if set.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{}\x1b[{}m", join(&set), text, join(&reset))
    }
}

fn join(codes: &[u8]) -> String {
    codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
