//! Named style registry.
//!
//! Maps tag names to the [`Style`] they apply. A fresh registry carries the
//! built-in message classes plus the `b` and `u` decoration shorthands.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::Color;
use crate::error::{CompileError, StyleError};
use crate::style::{Decoration, Style};

static BUILTIN_STYLES: Lazy<Vec<(&'static str, Style)>> = Lazy::new(|| {
    vec![
        ("success", Style::new().fg(Color::Black).bg(Color::Green)),
        ("info", Style::new().fg(Color::Green)),
        ("error", Style::new().fg(Color::Black).bg(Color::Yellow)),
        (
            "fatal",
            Style::new()
                .fg(Color::White)
                .bg(Color::Red)
                .decoration(Decoration::Bold),
        ),
        ("question", Style::new().fg(Color::Black).bg(Color::Cyan)),
        ("comment", Style::new().fg(Color::Yellow)),
        ("b", Style::new().decoration(Decoration::Bold)),
        ("u", Style::new().decoration(Decoration::Underline)),
    ]
});

/// A mapping from tag name to style.
///
/// Names are case-sensitive. Registering a name that already exists replaces
/// the previous style.
///
/// # Examples
///
/// ```
/// use tagstyle::{Color, Style, StyleRegistry};
///
/// let mut registry = StyleRegistry::default();
/// assert!(registry.contains("error"));
///
/// registry.register("note", Style::new().fg(Color::Blue));
/// assert_eq!(registry.resolve("note").unwrap().foreground(), Some(Color::Blue));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRegistry {
    entries: HashMap<String, Style>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let entries = BUILTIN_STYLES
            .iter()
            .map(|(name, style)| (name.to_string(), style.clone()))
            .collect();
        Self { entries }
    }
}

impl StyleRegistry {
    /// A registry with the built-in styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no entries at all.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the style for `name`.
    pub fn register(&mut self, name: impl Into<String>, style: Style) {
        let name = name.into();
        if self.entries.insert(name.clone(), style).is_some() {
            log::debug!("style element `{}` replaced", name);
        }
    }

    /// Parse `spec` with [`Style::parse`] and register the result.
    pub fn register_spec(&mut self, name: impl Into<String>, spec: &str) -> Result<(), StyleError> {
        let style = Style::parse(spec)?;
        self.register(name, style);
        Ok(())
    }

    /// Look up the style registered for `name`.
    pub fn resolve(&self, name: &str) -> Result<&Style, CompileError> {
        self.entries.get(name).ok_or_else(|| {
            log::debug!("no style element registered for `{}`", name);
            CompileError::UnknownStyleElement(name.to_string())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove an entry, returning its style if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Style> {
        self.entries.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
