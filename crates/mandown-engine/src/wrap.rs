//! Character-level line wrapping with block indentation.

use crate::style::IndentSpec;
use crate::surface::{Position, Surface};

/// Writes `text` into `surface` one character at a time.
///
/// The last column of each row is never used for content: a character that
/// would land there is moved to a fresh row first. Every line break, implicit
/// or taken from `text`, is followed by the indent run of `indent`, and a
/// character written at column 0 is preceded by it. The surface grows one row
/// at a time right before a break would leave its last row.
pub fn wrap_write<S: Surface + ?Sized>(surface: &mut S, text: &str, indent: IndentSpec) {
    let width = surface.width();

    for c in text.chars() {
        let Position { col, .. } = surface.cursor();
        if col + 1 >= width {
            surface.ensure_next_row();
            surface.write_char('\n');
            write_indent(surface, indent);
        } else if col == 0 {
            write_indent(surface, indent);
        }

        if c == '\n' {
            surface.ensure_next_row();
        }
        surface.write_char(c);
        if c == '\n' {
            write_indent(surface, indent);
        }
    }
}

fn write_indent<S: Surface + ?Sized>(surface: &mut S, indent: IndentSpec) {
    if let Some(fill) = indent.fill_char() {
        for _ in 0..indent.width {
            surface.write_char(fill);
        }
    }
}
