//! Depth-first walk of a document tree onto a surface.

use crate::document::{Document, DocumentNode, NodeType};
use crate::style::StyleTable;
use crate::surface::Surface;
use crate::wrap::wrap_write;

/// Walks sibling chains in order, emitting each element's prefix before
/// visiting its children and wrapping each text run with the indent of its
/// parent element.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    styles: StyleTable,
}

impl TreeRenderer {
    /// Renders the chain starting at the root's first element child.
    pub fn render_document<S: Surface + ?Sized>(&self, document: &Document, surface: &mut S) {
        if let Some(chain) = document.first_element_child() {
            self.render_chain(chain, document.root().tag(), surface);
        }
    }

    /// Renders `nodes` as a top-level sibling chain with no parent element.
    pub fn render<N: DocumentNode, S: Surface + ?Sized>(&self, nodes: &[N], surface: &mut S) {
        self.render_chain(nodes, None, surface);
    }

    fn render_chain<N: DocumentNode, S: Surface + ?Sized>(
        &self,
        nodes: &[N],
        parent: Option<&str>,
        surface: &mut S,
    ) {
        for node in nodes {
            match node.node_type() {
                NodeType::Element => {
                    let tag = node.tag().unwrap_or_default();
                    let rule = self.styles.resolve(tag);
                    log::trace!("<{tag}> prefix {:?}", rule.prefix);
                    write_literal(surface, rule.prefix);
                }
                NodeType::Text => {
                    let indent = self.styles.text_indent(parent);
                    wrap_write(surface, node.content().unwrap_or_default(), indent);
                }
                NodeType::Other => {}
            }
            self.render_chain(node.children(), node.tag(), surface);
        }
    }
}

/// Writes markup text verbatim, growing the surface before a newline or a
/// full row would run past the last row.
fn write_literal<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    let width = surface.width();
    for c in text.chars() {
        if c == '\n' || surface.cursor().col + 1 >= width {
            surface.ensure_next_row();
        }
        surface.write_char(c);
    }
}
