//! One headless rendering pass: parse, allocate surfaces, render, status.

use crate::document::MarkupParser;
use crate::error::ViewError;
use crate::render::TreeRenderer;
use crate::surface::{MemorySurface, Surface};

/// Surfaces produced by a rendering pass, ready for display.
#[derive(Debug)]
pub struct RenderedView {
    pub content: MemorySurface,
    pub status: MemorySurface,
    /// Row estimate the content surface was created with, shown in the
    /// status line.
    pub estimated_rows: usize,
}

pub struct RenderSession<P> {
    parser: P,
    renderer: TreeRenderer,
    initial_rows: Option<usize>,
}

impl<P: MarkupParser> RenderSession<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            renderer: TreeRenderer::default(),
            initial_rows: None,
        }
    }

    /// Overrides the row estimate otherwise taken from the block count.
    pub fn with_initial_rows(mut self, rows: Option<usize>) -> Self {
        self.initial_rows = rows;
        self
    }

    /// Renders `input` for a viewport `width` columns wide.
    ///
    /// Fails before allocating anything when the input does not parse or has
    /// no element to render.
    pub fn run(&self, input: &[u8], width: usize) -> Result<RenderedView, ViewError> {
        let document = self.parser.parse(input)?;
        if document.first_element_child().is_none() {
            return Err(ViewError::EmptyDocument);
        }
        let estimated_rows = self.initial_rows.unwrap_or_else(|| document.block_count());

        let height = estimated_rows
            .checked_add(1)
            .ok_or(ViewError::SurfaceAllocation {
                height: estimated_rows,
                width,
            })?;
        let mut content = MemorySurface::new(height, width)?;
        let mut status = MemorySurface::new(1, width)?;

        self.renderer.render_document(&document, &mut content);
        status.write_str(&estimated_rows.to_string());

        log::info!(
            "rendered {estimated_rows} estimated rows into {} rows",
            content.height()
        );
        Ok(RenderedView {
            content,
            status,
            estimated_rows,
        })
    }
}
