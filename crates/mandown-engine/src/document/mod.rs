//! Document tree consumed by the renderer.
//!
//! The renderer only ever borrows a tree through [`DocumentNode`], so any
//! parser that can expose element tags, text runs and ordered children can
//! feed it. [`Node`] is the owned tree produced by [`PulldownParser`].

mod parser;

pub use parser::{MarkupParser, PulldownParser};

/// Coarse classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
    Other,
}

/// Read-only view of a node in a document tree.
pub trait DocumentNode: Sized {
    fn node_type(&self) -> NodeType;

    /// Tag name, present for elements only.
    fn tag(&self) -> Option<&str>;

    /// Character data, present for text nodes only.
    fn content(&self) -> Option<&str>;

    fn children(&self) -> &[Self];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String },
    Text(String),
    /// Raw markup, references and anything else that carries no layout rule.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Element { tag: tag.into() },
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(content.into()),
            children: Vec::new(),
        }
    }

    pub fn other() -> Self {
        Self {
            kind: NodeKind::Other,
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}

impl DocumentNode for Node {
    fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::Element { .. } => NodeType::Element,
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::Other => NodeType::Other,
        }
    }

    fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag),
            _ => None,
        }
    }

    fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Tags that open a block of their own.
pub(crate) fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "h1" | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "p"
            | "pre"
            | "blockquote"
            | "ul"
            | "ol"
            | "li"
            | "hr"
            | "table"
            | "thead"
            | "tr"
            | "div"
    )
}

/// A parsed document with a single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The sibling chain starting at the root's first element child, skipping
    /// any leading text. `None` when the root holds no element at all.
    pub fn first_element_child(&self) -> Option<&[Node]> {
        let children = self.root.children();
        let index = children.iter().position(Node::is_element)?;
        Some(&children[index..])
    }

    /// Number of block elements in the tree, the initial row estimate for
    /// the content surface.
    pub fn block_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            let own = usize::from(node.tag().is_some_and(is_block_tag));
            own + node.children.iter().map(count).sum::<usize>()
        }
        self.root.children.iter().map(count).sum()
    }
}
