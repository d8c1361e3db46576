use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::{Document, Node, NodeKind, is_block_tag};
use crate::error::ViewError;

/// Turns raw markup bytes into a [`Document`].
pub trait MarkupParser {
    fn parse(&self, input: &[u8]) -> Result<Document, ViewError>;
}

/// Markdown parser producing the element tree an HTML renderer would emit.
#[derive(Debug, Default)]
pub struct PulldownParser;

impl PulldownParser {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupParser for PulldownParser {
    fn parse(&self, input: &[u8]) -> Result<Document, ViewError> {
        let source = std::str::from_utf8(input)?;
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_TASKLISTS;

        let mut builder = TreeBuilder::new();
        for event in Parser::new_ext(source, options) {
            builder.push(event);
        }
        let document = builder.finish();

        if document.first_element_child().is_none() {
            return Err(ViewError::EmptyDocument);
        }
        log::debug!("parsed {} block(s)", document.block_count());
        Ok(document)
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn element_tag(tag: &Tag<'_>) -> Option<&'static str> {
    let name = match tag {
        Tag::Paragraph => "p",
        Tag::Heading { level, .. } => heading_tag(*level),
        Tag::BlockQuote(_) => "blockquote",
        Tag::CodeBlock(_) => "pre",
        Tag::List(None) => "ul",
        Tag::List(Some(_)) => "ol",
        Tag::Item => "li",
        Tag::FootnoteDefinition(_) => "div",
        Tag::Table(_) => "table",
        Tag::TableHead => "thead",
        Tag::TableRow => "tr",
        Tag::TableCell => "td",
        Tag::Emphasis => "em",
        Tag::Strong => "strong",
        Tag::Strikethrough => "del",
        Tag::Link { .. } => "a",
        Tag::Image { .. } => "img",
        _ => return None,
    };
    Some(name)
}

/// Containers whose opening tag is followed by a line break.
fn breaks_after_open(tag: &str) -> bool {
    matches!(tag, "ul" | "ol" | "blockquote" | "table")
}

struct TreeBuilder {
    stack: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::element("body", Vec::new())],
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(&tag),
            Event::End(TagEnd::CodeBlock) => {
                self.close();
                self.close();
            }
            Event::End(_) => self.close(),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                let node = Node::element("code", vec![Node::text(code.to_string())]);
                self.append(node);
            }
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.append(Node::element("br", Vec::new())),
            Event::Rule => self.append(Node::element("hr", Vec::new())),
            _ => self.append(Node::other()),
        }
    }

    fn open(&mut self, tag: &Tag<'_>) {
        match element_tag(tag) {
            Some(name) => {
                self.stack.push(Node::element(name, Vec::new()));
                if matches!(tag, Tag::CodeBlock(_)) {
                    self.stack.push(Node::element("code", Vec::new()));
                } else if breaks_after_open(name) {
                    self.push_text("\n");
                }
            }
            None => self.stack.push(Node::other()),
        }
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            self.append(node);
        }
    }

    /// Appends a finished node to the open parent. Block elements are
    /// followed by a line break, the same whitespace an HTML serializer emits
    /// between blocks.
    fn append(&mut self, node: Node) {
        let breaks = match &node.kind {
            NodeKind::Element { tag } => is_block_tag(tag) || tag == "br",
            _ => false,
        };
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
        if breaks {
            self.push_text("\n");
        }
    }

    fn push_text(&mut self, text: &str) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if let Some(Node {
            kind: NodeKind::Text(existing),
            ..
        }) = parent.children.last_mut()
        {
            existing.push_str(text);
        } else {
            parent.children.push(Node::text(text));
        }
    }

    fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            self.close();
        }
        let root = self
            .stack
            .pop()
            .unwrap_or_else(|| Node::element("body", Vec::new()));
        Document::new(root)
    }
}
