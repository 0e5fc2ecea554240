//! Markup compiler.
//!
//! Runs lexer and parser over a message and evaluates the resulting tree
//! against a [`StyleRegistry`].

use crate::error::CompileError;
use crate::node::Node;
use crate::parser::{Lexer, Parser};
use crate::registry::StyleRegistry;
use crate::strip::strip_tags;
use crate::style::Style;

/// Compiles tag markup into terminal output.
///
/// With styling enabled, tags are replaced by the escape sequences of their
/// registered styles. With styling disabled, tags are stripped and their
/// content kept.
///
/// # Examples
///
/// ```
/// use tagstyle::Compiler;
///
/// let mut compiler = Compiler::new();
/// assert_eq!(
///     compiler.compile("<error>bad</error>").unwrap(),
///     "\x1b[30;43mbad\x1b[39;49m"
/// );
///
/// compiler.set_styled(false);
/// assert_eq!(compiler.compile("<error>bad</error>").unwrap(), "bad");
/// ```
#[derive(Clone, Debug)]
pub struct Compiler {
    lexer: Lexer,
    parser: Parser,
    registry: StyleRegistry,
    styled: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// A styled compiler with the built-in styles.
    pub fn new() -> Self {
        Self::with_registry(StyleRegistry::default())
    }

    /// A styled compiler using `registry`.
    pub fn with_registry(registry: StyleRegistry) -> Self {
        Self {
            lexer: Lexer::new(),
            parser: Parser::new(),
            registry,
            styled: true,
        }
    }

    /// A compiler that strips tags instead of styling them.
    pub fn unstyled() -> Self {
        let mut compiler = Self::new();
        compiler.set_styled(false);
        compiler
    }

    /// Enable or disable styling for subsequent calls.
    pub fn set_styled(&mut self, styled: bool) {
        self.styled = styled;
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    /// Register a style under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, style: Style) {
        self.registry.register(name, style);
    }

    /// Compile `message` into its final output.
    ///
    /// Lexer and parser failures are reported as
    /// [`CompileError::CompilationFailed`]; a tag naming an unregistered style
    /// fails with [`CompileError::UnknownStyleElement`].
    pub fn compile(&self, message: &str) -> Result<String, CompileError> {
        log::trace!(
            "compiling message ({} bytes, styled: {})",
            message.len(),
            self.styled
        );

        if !self.styled {
            return Ok(strip_tags(message));
        }

        let tokens = self.lexer.lex(message)?;
        let root = self.parser.parse(tokens)?;
        self.compile_tree(&root)
    }

    /// Evaluate an already-built tree against this compiler's registry.
    pub fn compile_tree(&self, root: &Node) -> Result<String, CompileError> {
        evaluate(root, &self.registry)
    }
}

/// Evaluate a markup tree against `registry`.
///
/// Each child of a tag is wrapped in the tag's style on its own, so a tag
/// with several children emits one escape sequence pair per child.
pub fn evaluate(node: &Node, registry: &StyleRegistry) -> Result<String, CompileError> {
    match node {
        Node::Text(value) => Ok(value.clone()),
        Node::Root(children) => children
            .iter()
            .map(|child| evaluate(child, registry))
            .collect(),
        Node::Tag { name, children } => {
            let style = registry.resolve(name)?;
            children
                .iter()
                .map(|child| evaluate(child, registry).map(|out| style.format(&out)))
                .collect()
        }
    }
}
