//! Console response writer.
//!
//! Compiles each message with a [`Compiler`] and writes the result to an
//! output stream.

use std::io::{self, Stdout, Write};

use crossterm::tty::IsTty;
use tagstyle::Compiler;

use crate::error::Result;

/// When to emit styled output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Style only when writing to a terminal, honoring `NO_COLOR` and
    /// `CLICOLOR_FORCE`.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style; tags are stripped.
    Never,
}

impl ColorChoice {
    /// Whether output to a target with the given terminal status is styled.
    pub fn should_style(self, is_tty: bool) -> bool {
        let no_color = std::env::var("NO_COLOR").ok();
        let force = std::env::var("CLICOLOR_FORCE").ok();
        self.resolve(is_tty, no_color.as_deref(), force.as_deref())
    }

    fn resolve(self, is_tty: bool, no_color: Option<&str>, force: Option<&str>) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if no_color.is_some_and(|v| !v.is_empty()) {
                    false
                } else if force.is_some_and(|v| v != "0") {
                    true
                } else {
                    is_tty
                }
            }
        }
    }
}

/// Writes compiled markup messages to a stream.
///
/// # Examples
///
/// ```
/// use tagstyle_console::ConsoleWriter;
///
/// let mut writer = ConsoleWriter::new(Vec::new(), false);
/// writer.writeln("<info>done</info>").unwrap();
/// assert_eq!(writer.into_inner(), b"done\n");
/// ```
pub struct ConsoleWriter<W: Write> {
    out: W,
    compiler: Compiler,
    quiet: bool,
}

impl ConsoleWriter<Stdout> {
    /// A writer for standard output.
    pub fn stdout(choice: ColorChoice) -> Self {
        let out = io::stdout();
        let styled = choice.should_style(out.is_tty());
        log::debug!("stdout writer created (choice: {:?}, styled: {})", choice, styled);
        Self::new(out, styled)
    }
}

impl<W: Write> ConsoleWriter<W> {
    /// A writer with the built-in styles.
    pub fn new(out: W, styled: bool) -> Self {
        let mut compiler = Compiler::new();
        compiler.set_styled(styled);
        Self::with_compiler(out, compiler)
    }

    /// A writer using an existing compiler.
    pub fn with_compiler(out: W, compiler: Compiler) -> Self {
        Self {
            out,
            compiler,
            quiet: false,
        }
    }

    /// Compile `message` and write it.
    ///
    /// Nothing is written if compilation fails.
    pub fn write(&mut self, message: &str) -> Result<()> {
        self.emit(message, false)
    }

    /// Compile `message` and write it followed by a newline.
    pub fn writeln(&mut self, message: &str) -> Result<()> {
        self.emit(message, true)
    }

    fn emit(&mut self, message: &str, newline: bool) -> Result<()> {
        if self.quiet {
            log::trace!("quiet mode, dropping message ({} bytes)", message.len());
            return Ok(());
        }

        let mut output = self.compiler.compile(message)?;
        if newline {
            output.push('\n');
        }
        self.out.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn set_styled(&mut self, styled: bool) {
        self.compiler.set_styled(styled);
    }

    pub fn is_styled(&self) -> bool {
        self.compiler.is_styled()
    }

    /// In quiet mode every write succeeds without output.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    /// Mutable access to the compiler, e.g. to register custom styles.
    pub fn compiler_mut(&mut self) -> &mut Compiler {
        &mut self.compiler
    }

    /// Consume the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
