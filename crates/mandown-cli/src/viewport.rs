use mandown_engine::MemorySurface;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Shows the rows of a surface starting at `offset`, clipped to the area.
pub struct SurfaceView<'a> {
    surface: &'a MemorySurface,
    offset: usize,
}

impl<'a> SurfaceView<'a> {
    pub fn new(surface: &'a MemorySurface) -> Self {
        Self { surface, offset: 0 }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for SurfaceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in (area.top()..area.bottom()).zip(self.offset..) {
            let Some(cells) = self.surface.row(row) else {
                break;
            };
            for (x, &c) in (area.left()..area.right()).zip(cells) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(display_char(c));
                }
            }
        }
    }
}

/// Tabs and other control characters occupy one blank cell.
fn display_char(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}
