//! Growable text canvas the renderer writes into.

use std::mem;

use crate::error::ViewError;

/// Cursor location as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A fixed-width canvas with a cursor whose row count can only grow.
pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn cursor(&self) -> Position;

    /// Writes `c` at the cursor and advances. Never grows the surface.
    fn write_char(&mut self, c: char);

    /// Extends the surface to `new_height` rows. No-op unless it is larger.
    fn grow(&mut self, new_height: usize);

    /// Grows by one row if the cursor sits on the last row, so that the next
    /// line break has a row to land on.
    fn ensure_next_row(&mut self) {
        let height = self.height();
        if self.cursor().row + 1 >= height {
            self.grow(height + 1);
        }
    }

    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }
}

const BLANK: char = ' ';

/// Headless surface keeping every cell in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    width: usize,
    rows: Vec<Vec<char>>,
    cursor: Position,
}

impl MemorySurface {
    /// Allocates a blank `height` x `width` surface.
    ///
    /// Zero dimensions and sizes the allocator cannot provide are reported as
    /// [`ViewError::SurfaceAllocation`] instead of aborting.
    pub fn new(height: usize, width: usize) -> Result<Self, ViewError> {
        let failed = || ViewError::SurfaceAllocation { height, width };
        let fits = height
            .checked_mul(width)
            .and_then(|cells| cells.checked_mul(mem::size_of::<char>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if height == 0 || width == 0 || !fits {
            return Err(failed());
        }

        let mut rows = Vec::new();
        rows.try_reserve_exact(height).map_err(|_| failed())?;
        for _ in 0..height {
            rows.push(blank_row(width).ok_or_else(failed)?);
        }
        Ok(Self {
            width,
            rows,
            cursor: Position::default(),
        })
    }

    /// Cells of `row`, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Text of `row` with trailing blank cells removed.
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.row(row).map(|cells| {
            let text: String = cells.iter().collect();
            text.trim_end_matches(BLANK).to_string()
        })
    }

    /// Every row as text, trailing blank rows included.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows.len())
            .filter_map(|row| self.row_text(row))
            .collect()
    }

    /// Rows joined by newlines with trailing blank rows dropped.
    pub fn contents(&self) -> String {
        let mut lines = self.lines();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn next_line(&mut self) {
        if self.cursor.row + 1 < self.rows.len() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
    }
}

fn blank_row(width: usize) -> Option<Vec<char>> {
    let mut row = Vec::new();
    row.try_reserve_exact(width).ok()?;
    row.resize(width, BLANK);
    Some(row)
}

impl Surface for MemorySurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn write_char(&mut self, c: char) {
        if c == '\n' {
            // On the last row this only returns to column 0.
            self.next_line();
            self.cursor.col = 0;
            return;
        }

        let Position { row, col } = self.cursor;
        self.rows[row][col] = c;
        if col + 1 < self.width {
            self.cursor.col += 1;
        } else {
            self.next_line();
        }
    }

    fn grow(&mut self, new_height: usize) {
        if new_height <= self.rows.len() {
            return;
        }
        log::debug!("growing surface {} -> {new_height} rows", self.rows.len());
        self.rows.resize_with(new_height, || vec![BLANK; self.width]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10)]
    #[case(3, 0)]
    fn zero_dimension_fails(#[case] height: usize, #[case] width: usize) {
        let err = MemorySurface::new(height, width).unwrap_err();
        assert!(matches!(err, ViewError::SurfaceAllocation { .. }));
    }

    #[rstest]
    #[case(usize::MAX / 64, 80)]
    #[case(usize::MAX, 2)]
    #[case(isize::MAX as usize / 4, 2)]
    fn oversized_surface_fails(#[case] height: usize, #[case] width: usize) {
        let err = MemorySurface::new(height, width).unwrap_err();
        assert!(matches!(
            err,
            ViewError::SurfaceAllocation { height: h, width: w } if h == height && w == width
        ));
    }

    #[test]
    fn new_surface_is_blank_with_cursor_at_origin() {
        let surface = MemorySurface::new(2, 5).unwrap();
        assert_eq!(surface.cursor(), Position::new(0, 0));
        assert_eq!(surface.height(), 2);
        assert_eq!(surface.width(), 5);
        assert_eq!(surface.lines(), vec!["", ""]);
    }

    #[test]
    fn write_char_advances_one_column() {
        let mut surface = MemorySurface::new(2, 5).unwrap();
        surface.write_str("ab\t");
        assert_eq!(surface.cursor(), Position::new(0, 3));
        assert_eq!(surface.row_text(0).unwrap(), "ab\t");
    }

    #[test]
    fn write_char_wraps_at_last_column() {
        let mut surface = MemorySurface::new(2, 3).unwrap();
        surface.write_str("abc");
        assert_eq!(surface.cursor(), Position::new(1, 0));
        surface.write_char('d');
        assert_eq!(surface.lines(), vec!["abc", "d"]);
    }

    #[test]
    fn newline_moves_to_next_row_start() {
        let mut surface = MemorySurface::new(2, 5).unwrap();
        surface.write_str("ab\n");
        assert_eq!(surface.cursor(), Position::new(1, 0));
    }

    #[test]
    fn newline_on_last_row_clamps_without_growing() {
        let mut surface = MemorySurface::new(1, 5).unwrap();
        surface.write_str("ab\n");
        assert_eq!(surface.height(), 1);
        assert_eq!(surface.cursor(), Position::new(0, 0));
    }

    #[test]
    fn grow_keeps_content_and_cursor() {
        let mut surface = MemorySurface::new(1, 4).unwrap();
        surface.write_str("xy");
        surface.grow(3);

        assert_eq!(surface.height(), 3);
        assert_eq!(surface.cursor(), Position::new(0, 2));
        assert_eq!(surface.lines(), vec!["xy", "", ""]);
    }

    #[test]
    fn grow_never_shrinks() {
        let mut surface = MemorySurface::new(3, 4).unwrap();
        surface.grow(2);
        surface.grow(3);
        assert_eq!(surface.height(), 3);
    }

    #[test]
    fn ensure_next_row_grows_only_from_last_row() {
        let mut surface = MemorySurface::new(2, 4).unwrap();
        surface.ensure_next_row();
        assert_eq!(surface.height(), 2);

        surface.write_char('\n');
        surface.ensure_next_row();
        assert_eq!(surface.height(), 3);
    }

    #[test]
    fn contents_drops_trailing_blank_rows() {
        let mut surface = MemorySurface::new(4, 6).unwrap();
        surface.write_str("one\ntwo");
        assert_eq!(surface.contents(), "one\ntwo");
    }
}
