//! Error types for tag markup compilation.

use std::fmt;

use thiserror::Error;

/// Why a tag could not be matched while building the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unmatched {
    /// A close tag appeared with no open tag in scope.
    UnexpectedClose,
    /// A close tag does not match the innermost open tag.
    Mismatched {
        /// Name of the innermost open tag.
        open: String,
    },
    /// An open tag was never closed before end of input.
    Unclosed,
}

impl fmt::Display for Unmatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unmatched::UnexpectedClose => write!(f, "close tag has no matching open tag"),
            Unmatched::Mismatched { open } => write!(f, "expected `</{}>`", open),
            Unmatched::Unclosed => write!(f, "tag is never closed"),
        }
    }
}

/// Errors raised while lexing or parsing markup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// An unescaped `<` was found while already reading a tag name.
    #[error("malformed markup at offset {offset}: unexpected `<` inside a tag near \"{context}\"")]
    MalformedMarkup {
        /// Character offset of the offending `<`.
        offset: usize,
        /// A short window of the input around the offset.
        context: String,
    },

    /// A tag could not be paired with its counterpart.
    #[error("unmatched tag `{tag}` at offset {offset}: {reason}")]
    UnmatchedTag {
        /// Name of the tag that could not be matched.
        tag: String,
        /// Character offset of the tag's `<`.
        offset: usize,
        /// What went wrong.
        reason: Unmatched,
    },
}

/// The style attribute an invalid name was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleAttribute {
    Foreground,
    Background,
    Decoration,
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleAttribute::Foreground => "foreground color",
            StyleAttribute::Background => "background color",
            StyleAttribute::Decoration => "decoration",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building or mutating a style.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    /// The name is not a recognized color or decoration.
    #[error("invalid {attribute}: {value}")]
    InvalidStyleAttribute {
        attribute: StyleAttribute,
        value: String,
    },
}

impl StyleError {
    pub(crate) fn invalid(attribute: StyleAttribute, value: impl Into<String>) -> Self {
        StyleError::InvalidStyleAttribute {
            attribute,
            value: value.into(),
        }
    }
}

/// Errors returned by [`Compiler::compile`](crate::Compiler::compile).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    /// The markup could not be lexed or parsed.
    #[error("markup compilation failed: {0}")]
    CompilationFailed(#[source] MarkupError),

    /// A tag refers to a style that is not registered.
    #[error("unknown style element: {0}")]
    UnknownStyleElement(String),
}

impl CompileError {
    /// The lexer or parser error behind a `CompilationFailed`.
    pub fn markup_error(&self) -> Option<&MarkupError> {
        match self {
            CompileError::CompilationFailed(cause) => Some(cause),
            CompileError::UnknownStyleElement(_) => None,
        }
    }
}

impl From<MarkupError> for CompileError {
    fn from(err: MarkupError) -> Self {
        CompileError::CompilationFailed(err)
    }
}
