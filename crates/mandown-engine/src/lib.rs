pub mod document;
pub mod error;
pub mod render;
pub mod session;
pub mod style;
pub mod surface;
pub mod wrap;

// Re-export key types for easier usage
pub use document::{
    Document, DocumentNode, MarkupParser, Node, NodeKind, NodeType, PulldownParser,
};
pub use error::ViewError;
pub use render::TreeRenderer;
pub use session::{RenderSession, RenderedView};
pub use style::{IndentSpec, StyleRule, StyleTable};
pub use surface::{MemorySurface, Position, Surface};
pub use wrap::wrap_write;
