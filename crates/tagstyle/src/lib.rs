//! Tag markup compiler for styled console output.
//!
//! This crate compiles text like `<error>Failed:</error> <b>3</b> tests` into
//! a string carrying ANSI escape sequences for a terminal.
//!
//! # Overview
//!
//! The markup format uses angle-bracket tags naming registered styles:
//!
//! - `<error>text</error>` - Apply the `error` style
//! - `<b>text</b>` - Bold, `<u>text</u>` - Underline
//! - Tags nest: `<info>a <b>b</b></info>`
//! - `\<` - Escaped bracket (literal `<`)
//!
//! Tags have no attributes and there is no self-closing form.
//!
//! # Pipeline
//!
//! [`Lexer`](parser::Lexer) turns the input into [`Token`](parser::Token)s,
//! [`Parser`](parser::Parser) builds a [`Node`] tree from them, and
//! [`Compiler`] evaluates the tree against a [`StyleRegistry`].
//!
//! # Usage
//!
//! ```
//! use tagstyle::{Color, Compiler, Style};
//!
//! let mut compiler = Compiler::new();
//! compiler.register("path", Style::new().fg(Color::Cyan));
//!
//! let out = compiler.compile("wrote <path>out.txt</path>").unwrap();
//! assert_eq!(out, "wrote \x1b[36mout.txt\x1b[39m");
//!
//! compiler.set_styled(false);
//! assert_eq!(compiler.compile("wrote <path>out.txt</path>").unwrap(), "wrote out.txt");
//! ```

pub mod color;
pub mod compiler;
pub mod error;
pub mod node;
pub mod parser;
pub mod registry;
pub mod strip;
pub mod style;

// Re-export main types at crate root
pub use color::Color;
pub use compiler::{Compiler, evaluate};
pub use error::{CompileError, MarkupError, StyleAttribute, StyleError, Unmatched};
pub use node::Node;
pub use registry::StyleRegistry;
pub use strip::strip_tags;
pub use style::{Decoration, Style};
