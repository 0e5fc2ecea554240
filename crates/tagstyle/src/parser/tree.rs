//! Tree builder for tag markup.
//!
//! Turns the lexer's token sequence into a [`Node`] tree, checking that
//! every close tag matches the innermost open tag.

use crate::error::{MarkupError, Unmatched};
use crate::node::Node;

use super::lexer::{Lexer, Token, TokenKind};

/// Builds a markup tree from tokens.
///
/// # Examples
///
/// ```
/// use tagstyle::Node;
/// use tagstyle::parser::Parser;
///
/// let root = Parser::new().parse_str("<b>Hi</b> there").unwrap();
/// assert_eq!(
///     root,
///     Node::Root(vec![Node::tag("b", vec![Node::text("Hi")]), Node::text(" there")])
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Parser;

/// An open tag waiting for its close.
#[derive(Debug)]
struct Frame {
    name: String,
    offset: usize,
    children: Vec<Node>,
}

/// Stack of open tags above the root.
#[derive(Debug, Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    /// Children of the innermost open frame.
    fn current(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn open(&mut self, name: String, offset: usize) {
        self.stack.push(Frame {
            name,
            offset,
            children: Vec::new(),
        });
    }

    fn close(&mut self, name: String, offset: usize) -> Result<(), MarkupError> {
        let Some(frame) = self.stack.pop() else {
            return Err(MarkupError::UnmatchedTag {
                tag: name,
                offset,
                reason: Unmatched::UnexpectedClose,
            });
        };

        if frame.name != name {
            return Err(MarkupError::UnmatchedTag {
                tag: name,
                offset,
                reason: Unmatched::Mismatched { open: frame.name },
            });
        }

        let node = Node::Tag {
            name: frame.name,
            children: frame.children,
        };
        self.current().push(node);
        Ok(())
    }

    fn finish(mut self) -> Result<Node, MarkupError> {
        if let Some(frame) = self.stack.pop() {
            return Err(MarkupError::UnmatchedTag {
                tag: frame.name,
                offset: frame.offset,
                reason: Unmatched::Unclosed,
            });
        }
        Ok(Node::Root(self.root))
    }
}

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Build the tree for a token sequence.
    ///
    /// Tokens are consumed up to and including the first `EndOfInput`.
    pub fn parse(&self, tokens: impl IntoIterator<Item = Token>) -> Result<Node, MarkupError> {
        let mut builder = TreeBuilder::default();

        for token in tokens {
            let offset = token.offset();
            let kind = token.kind();
            let value = token.value().unwrap_or_default().to_string();

            match kind {
                TokenKind::Word => builder.current().push(Node::Text(value)),
                TokenKind::TagOpen => builder.open(value, offset),
                TokenKind::TagClose => builder.close(value, offset)?,
                TokenKind::EndOfInput => break,
            }
        }

        builder.finish()
    }

    /// Lex and parse `input` in one step.
    pub fn parse_str(&self, input: &str) -> Result<Node, MarkupError> {
        let tokens = Lexer::new().lex(input)?;
        self.parse(tokens)
    }
}
