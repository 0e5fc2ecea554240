//! Markup tree nodes.

/// A node in the markup tree built by the [`Parser`](crate::parser::Parser).
///
/// Every node owns its children; the tree never shares nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// The document root. Groups its children without styling them.
    Root(Vec<Node>),
    /// A tag applying the named style to its children.
    ///
    /// A tag with no children is an empty tag (`<b></b>`).
    Tag { name: String, children: Vec<Node> },
    /// Literal text. Always a leaf.
    Text(String),
}

impl Node {
    /// Create a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Create a tag node.
    pub fn tag(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Tag {
            name: name.into(),
            children,
        }
    }

    /// Child nodes, empty for text leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children) | Node::Tag { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// The tag name, for tag nodes.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Tag { name, .. } => Some(name),
            _ => None,
        }
    }

    /// All text below this node, in document order, with tags dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(value),
            Node::Root(children) | Node::Tag { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
