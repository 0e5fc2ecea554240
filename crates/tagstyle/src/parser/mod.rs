//! Parser for tag markup.
//!
//! This module contains the lexer and the tree builder.

mod lexer;
mod tree;

pub use lexer::{Lexer, Token, TokenKind};
pub use tree::Parser;
