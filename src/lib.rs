//! Styled console output built on the `tagstyle` markup compiler.
//!
//! [`ConsoleWriter`] compiles each message and writes it to a stream,
//! styling it or stripping its tags depending on where the output goes.

pub mod error;
pub mod log_init;
pub mod writer;

pub use error::{ConsoleError, Result};
pub use log_init::init_logger;
pub use writer::{ColorChoice, ConsoleWriter};

pub use tagstyle::{Color, CompileError, Compiler, Decoration, Style, StyleRegistry};
