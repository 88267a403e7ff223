//! The draw buffer: a double-buffered cell grid views render into.
//!
//! The buffer is the canonical in-memory picture of what the terminal
//! should show next. Views write cells through the primitives here and
//! the application flushes the whole grid to the terminal surface once
//! per frame with [`DrawBuffer::flush_to`].
//!
//! Addressing is row-major (`index = x + y * width`) against the buffer's
//! width *at the time of the call*. A resize between two operations
//! changes addressing, so anything spanning a resize must recompute its
//! offsets from rects.
//!
//! Except for the explicitly clamped run writes ([`DrawBuffer::move_char`]
//! and friends), the primitives do not range-check rects or offsets;
//! callers pre-validate, and an out-of-range write panics on the slice
//! bounds check rather than corrupting neighbouring state.

use anyhow::Result;

use crate::geom::{Point, Rect, Size};
use crate::term::cell::{ACell, AString, NUL};
use crate::term::surface::TerminalSurface;
use crate::term::Attr;

/// Single-line box-drawing glyphs used for borders and title tabs.
pub mod glyph {
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    /// Left half of a title tab: `┤ title ├`.
    pub const TEE_LEFT: char = '┤';
    /// Right half of a title tab.
    pub const TEE_RIGHT: char = '├';
}

/// Flat row-major grid of attributed cells sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBuffer {
    size: Size,
    cells: Vec<ACell>,
}

impl DrawBuffer {
    /// A buffer cleared to grey-on-black spaces.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![ACell::default(); size.offset()],
        }
    }

    /// Re-read the terminal size from `surface` and re-allocate, clearing
    /// to the default attribute. Invalidates every linear offset callers
    /// may have computed before the call.
    pub fn resize(&mut self, surface: &mut dyn TerminalSurface) -> Result<()> {
        let size = surface.get_size()?;
        self.resize_to(size);
        Ok(())
    }

    /// As [`resize`](DrawBuffer::resize), with the size supplied directly.
    pub fn resize_to(&mut self, size: Size) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size.offset(), ACell::default());
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of cells; always equals `size().offset()`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn width(&self) -> usize {
        self.size.width.max(0) as usize
    }

    pub fn cells(&self) -> &[ACell] {
        &self.cells
    }

    /// Linear offset of a point under the *current* width.
    pub fn offset_of(&self, p: Point) -> usize {
        p.x as usize + p.y as usize * self.width()
    }

    /// Fill every cell with a blank in `attr`.
    pub fn clear(&mut self, attr: Attr) {
        self.cells.fill(ACell::blank(attr));
    }

    /// Apply `attr` to every cell; when `clear` is set the glyphs are
    /// overwritten with `empty` too, otherwise this is an attribute-only
    /// repaint (used for flicker-free recoloring).
    pub fn fill(&mut self, attr: Attr, clear: bool, empty: char) {
        for cell in &mut self.cells {
            if clear {
                cell.glyph = empty;
            }
            cell.attr = attr;
        }
    }

    /// As [`fill`](DrawBuffer::fill), restricted to `area`.
    ///
    /// Precondition: `area` lies within the buffer.
    pub fn fill_rect(&mut self, area: &Rect, attr: Attr, clear: bool, empty: char) {
        let width = self.width();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let loc = x as usize + y as usize * width;
                if clear {
                    self.cells[loc].glyph = empty;
                }
                self.cells[loc].attr = attr;
            }
        }
    }

    /// Paint a rectangle: interior cells get a blank in `inside`; the
    /// one-cell edge ring gets box-drawing glyphs in `border` when
    /// `decorated`, or the same blank interior treatment when not. The
    /// border ring is always owned either way; decoration is cosmetic.
    ///
    /// Precondition: `shape` lies within the buffer.
    pub fn draw_rect(&mut self, shape: &Rect, border: Attr, inside: Attr, decorated: bool) {
        let width = self.width();
        let (left, right) = (shape.left(), shape.right());
        let (top, bottom) = (shape.top(), shape.bottom());

        for y in top..bottom {
            for x in left..right {
                let loc = x as usize + y as usize * width;
                let on_row_edge = y == top || y == bottom - 1;
                let on_col_edge = x == left || x == right - 1;

                if decorated && (on_row_edge || on_col_edge) {
                    let g = match (x, y) {
                        _ if x == left && y == top => glyph::TOP_LEFT,
                        _ if x == right - 1 && y == top => glyph::TOP_RIGHT,
                        _ if x == left && y == bottom - 1 => glyph::BOTTOM_LEFT,
                        _ if x == right - 1 && y == bottom - 1 => glyph::BOTTOM_RIGHT,
                        _ if on_row_edge => glyph::HORIZONTAL,
                        _ => glyph::VERTICAL,
                    };
                    self.cells[loc] = ACell::new(g, border);
                } else {
                    self.cells[loc] = ACell::blank(inside);
                }
            }
        }
    }

    /// Write a run of `count` copies of `c` starting at `indent`.
    ///
    /// The run is clamped at the end of the buffer; a start past the end
    /// is a no-op. A NUL glyph repaints the attribute only, and an empty
    /// attribute writes the glyph only.
    pub fn move_char(&mut self, indent: usize, c: char, attr: Attr, count: usize) {
        if count == 0 || indent >= self.cells.len() {
            return;
        }
        let count = count.min(self.cells.len() - indent);

        for cell in &mut self.cells[indent..indent + count] {
            if attr.is_empty() {
                cell.glyph = c;
            } else if c == NUL {
                cell.attr = attr;
            } else {
                *cell = ACell::new(c, attr);
            }
        }
    }

    /// Attributed-cell variant of [`move_char`](DrawBuffer::move_char).
    pub fn move_achar(&mut self, indent: usize, c: ACell, count: usize) {
        if count == 0 || indent >= self.cells.len() {
            return;
        }
        let count = count.min(self.cells.len() - indent);

        for cell in &mut self.cells[indent..indent + count] {
            if c.glyph == NUL {
                cell.attr = c.attr;
            } else {
                *cell = c;
            }
        }
    }

    /// Write an attributed string starting at `indent`. A line feed in
    /// the run advances the write position to the start of the next
    /// terminal row instead of being printed.
    ///
    /// With `decorated` set, a title-tab glyph pair is written in the two
    /// cells before the string (`┤` + blank) and after it (blank + `├`);
    /// callers must leave two cells of headroom before `indent`.
    pub fn move_str(&mut self, indent: usize, s: &AString, decorated: bool) {
        if s.is_empty() {
            return;
        }
        let deco_attr = s[0].attr;

        if decorated && indent >= 2 {
            self.move_char(indent - 2, glyph::TEE_LEFT, deco_attr, 1);
            self.move_char(indent - 1, ' ', deco_attr, 1);
        }

        let width = self.width();
        let mut pos = 0usize;
        for cell in s {
            if cell.glyph == '\n' {
                pos += width - (pos % width);
            } else {
                self.move_char(indent + pos, cell.glyph, cell.attr, 1);
                pos += 1;
            }
        }

        if decorated {
            self.move_char(indent + pos, ' ', deco_attr, 1);
            self.move_char(indent + pos + 1, glyph::TEE_RIGHT, deco_attr, 1);
        }
    }

    /// Plain-text variant of [`move_str`](DrawBuffer::move_str).
    pub fn move_text(&mut self, indent: usize, text: &str, attr: Attr, decorated: bool) {
        self.move_str(indent, &AString::from_text(text, attr), decorated);
    }

    /// Single-cell write. Precondition: `indent` is in range.
    pub fn put_char(&mut self, indent: usize, c: char, attr: Attr) {
        self.cells[indent] = ACell::new(c, attr);
    }

    /// Single-cell write. Precondition: `indent` is in range.
    pub fn put_achar(&mut self, indent: usize, c: ACell) {
        self.cells[indent] = c;
    }

    /// Single-cell attribute repaint. Precondition: `indent` is in range.
    pub fn put_attribute(&mut self, indent: usize, attr: Attr) {
        self.cells[indent].attr = attr;
    }

    /// Hand the buffer to the terminal surface for one batched write.
    /// The only place per frame where cell data leaves process memory.
    pub fn flush_to(&self, surface: &mut dyn TerminalSurface) -> Result<()> {
        surface.render_buffer(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(w: i32, h: i32) -> DrawBuffer {
        DrawBuffer::new(Size::new(w, h))
    }

    #[test]
    fn length_tracks_size() {
        let b = buf(10, 4);
        assert_eq!(b.len(), 40);
        assert_eq!(b.len(), b.size().offset());
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut b = buf(4, 2);
        b.put_char(3, 'X', Attr::FG_RED);
        b.clear(Attr::BG_BLUE);
        assert!(b.cells().iter().all(|c| *c == ACell::blank(Attr::BG_BLUE)));
    }

    #[test]
    fn fill_without_clear_keeps_glyphs() {
        let mut b = buf(4, 1);
        b.put_char(1, 'H', Attr::FG_GREY);
        b.fill(Attr::BG_RED, false, '!');
        assert_eq!(b.cells()[1], ACell::new('H', Attr::BG_RED));
        assert_eq!(b.cells()[0].glyph, ' ');
    }

    #[test]
    fn move_char_attr_only_with_nul() {
        let mut b = buf(4, 1);
        b.put_char(0, 'A', Attr::FG_GREY);
        b.move_char(0, NUL, Attr::FG_RED, 1);
        assert_eq!(b.cells()[0], ACell::new('A', Attr::FG_RED));
    }

    #[test]
    fn move_char_glyph_only_with_empty_attr() {
        let mut b = buf(4, 1);
        b.put_char(0, 'A', Attr::FG_RED);
        b.move_char(0, 'B', Attr::empty(), 1);
        assert_eq!(b.cells()[0], ACell::new('B', Attr::FG_RED));
    }

    #[test]
    fn move_str_line_feed_wraps_to_next_row() {
        let mut b = buf(5, 3);
        b.move_str(0, &AString::from_text("ab\ncd", Attr::FG_GREY), false);
        assert_eq!(b.cells()[0].glyph, 'a');
        assert_eq!(b.cells()[1].glyph, 'b');
        // 'c' lands at the start of row 1.
        assert_eq!(b.cells()[5].glyph, 'c');
        assert_eq!(b.cells()[6].glyph, 'd');
    }

    #[test]
    fn decorated_rect_has_distinct_corners() {
        let mut b = buf(6, 4);
        b.draw_rect(&Rect::at(0, 0, 6, 4), Attr::FG_WHITE, Attr::BG_BLUE, true);
        assert_eq!(b.cells()[0].glyph, glyph::TOP_LEFT);
        assert_eq!(b.cells()[5].glyph, glyph::TOP_RIGHT);
        assert_eq!(b.cells()[18].glyph, glyph::BOTTOM_LEFT);
        assert_eq!(b.cells()[23].glyph, glyph::BOTTOM_RIGHT);
        assert_eq!(b.cells()[2].glyph, glyph::HORIZONTAL);
        assert_eq!(b.cells()[6].glyph, glyph::VERTICAL);
        // Interior.
        assert_eq!(b.cells()[8], ACell::blank(Attr::BG_BLUE));
    }

    #[test]
    fn undecorated_rect_still_owns_its_border_ring() {
        let mut b = buf(6, 4);
        b.put_char(0, 'Z', Attr::FG_RED);
        b.draw_rect(&Rect::at(0, 0, 6, 4), Attr::FG_WHITE, Attr::BG_BLUE, false);
        assert_eq!(b.cells()[0], ACell::blank(Attr::BG_BLUE));
    }
}
