//! Text view: a single attributed run with alignment.

use crate::geom::{Point, Size};
use crate::term::{ACell, AString, Attr, DrawBuffer};
use crate::views::view::{Renderable, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// A view holding one attributed string.
///
/// Setting text can grow the view (more line breaks grow the height,
/// longer content grows the width) but never shrinks it.
#[derive(Debug, Clone, Default)]
pub struct Text {
    view: View,
    contents: AString,
    width: usize,
    alignment: TextAlign,
}

/// Line count of a string: one more than its line feeds.
fn line_count(s: &str) -> usize {
    1 + s.chars().filter(|&c| c == '\n').count()
}

impl Text {
    pub fn new(content: &str, location: Point, attr: Attr) -> Self {
        Self::aligned(
            content,
            location,
            content.chars().count(),
            TextAlign::Left,
            attr,
        )
    }

    pub fn with_width(content: &str, location: Point, width: usize, attr: Attr) -> Self {
        Self::aligned(content, location, width, TextAlign::Left, attr)
    }

    pub fn aligned(
        content: &str,
        location: Point,
        width: usize,
        alignment: TextAlign,
        attr: Attr,
    ) -> Self {
        let mut view = View::default();
        view.client_rect_mut().origin = location;
        view.inner_rect_mut().origin = location;
        view.set_client_attribute(attr);
        view.set_inner_attribute(attr);

        let extent = Size::new(width as i32, line_count(content) as i32);
        view.inner_rect_mut().extent = extent;
        view.client_rect_mut().extent = extent;

        Self {
            contents: AString::from_text(content, attr),
            view,
            width,
            alignment,
        }
    }

    pub fn set_attribute(&mut self, attr: Attr) {
        self.view.set_client_attribute(attr);
        self.view.set_inner_attribute(attr);
    }

    pub fn attribute(&self) -> Attr {
        self.view.inner_attribute()
    }

    pub fn set_alignment(&mut self, alignment: TextAlign) {
        self.alignment = alignment;
    }

    pub fn alignment(&self) -> TextAlign {
        self.alignment
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Append one character in the view's current attribute.
    pub fn append(&mut self, ch: char) {
        self.append_cell(ACell::new(ch, self.view.inner_attribute()));
    }

    /// Append one character in an explicit attribute.
    pub fn append_attr(&mut self, ch: char, attr: Attr) {
        self.append_cell(ACell::new(ch, attr));
    }

    pub fn append_cell(&mut self, cell: ACell) {
        self.contents.push(cell);
        self.grow_width_to(self.contents.len());
    }

    /// Replace the contents with plain text in the view's attribute.
    pub fn set_text(&mut self, content: &str) {
        let lines = line_count(content);
        self.contents = AString::from_text(content, self.view.inner_attribute());
        self.grow_height_to(lines);
        self.grow_width_to(self.contents.len());
    }

    /// Replace the contents with an already-attributed run.
    pub fn set_astring(&mut self, content: AString) {
        let lines = line_count(&content.to_text());
        self.contents = content;
        self.grow_height_to(lines);
        self.grow_width_to(self.contents.len());
    }

    pub fn text(&self) -> String {
        self.contents.to_text()
    }

    pub fn contents(&self) -> &AString {
        &self.contents
    }

    fn grow_height_to(&mut self, lines: usize) {
        if (self.view.client_rect().extent.height as usize) < lines {
            self.view.inner_rect_mut().extent.height = lines as i32;
            self.view.client_rect_mut().extent = self.view.inner_rect().extent;
        }
    }

    fn grow_width_to(&mut self, len: usize) {
        if (self.view.client_rect().extent.width as usize) < len {
            self.view.inner_rect_mut().extent.width = len as i32;
            self.view.client_rect_mut().extent = self.view.inner_rect().extent;
            self.width = len;
        }
    }
}

impl Renderable for Text {
    fn render(&mut self, buf: &mut DrawBuffer) {
        let client = self.view.client_rect();

        // Round the length up to even; wide-glyph content is padded to
        // two cells per character and alignment must not split a pair.
        let mut len = self.contents.len() as i32;
        if len % 2 != 0 {
            len += 1;
        }

        let mut pos = buf.offset_of(client.origin) as i32;
        match self.alignment {
            TextAlign::Left => {}
            TextAlign::Right => pos += client.extent.width - len,
            TextAlign::Center => pos += client.extent.width / 2 - len / 2,
        }

        buf.move_str(pos.max(0) as usize, &self.contents, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_row(buf: &DrawBuffer, y: usize) -> String {
        let w = buf.width();
        buf.cells()[y * w..(y + 1) * w].iter().map(|c| c.glyph).collect()
    }

    #[test]
    fn left_aligned_text_starts_at_its_origin() {
        let mut buf = DrawBuffer::new(Size::new(20, 3));
        let mut t = Text::new("hello", Point::new(2, 1), Attr::FG_GREY);
        t.render(&mut buf);
        assert_eq!(glyph_row(&buf, 1), "  hello             ");
    }

    #[test]
    fn center_alignment_uses_even_rounded_length() {
        let mut buf = DrawBuffer::new(Size::new(20, 1));
        let mut t = Text::aligned("abc", Point::new(0, 0), 20, TextAlign::Center, Attr::FG_GREY);
        t.render(&mut buf);
        // len rounds 3 -> 4; start = 10 - 2 = 8.
        assert_eq!(glyph_row(&buf, 0), "        abc         ");
    }

    #[test]
    fn right_alignment() {
        let mut buf = DrawBuffer::new(Size::new(10, 1));
        let mut t = Text::aligned("ab", Point::new(0, 0), 10, TextAlign::Right, Attr::FG_GREY);
        t.render(&mut buf);
        assert_eq!(glyph_row(&buf, 0), "        ab");
    }

    #[test]
    fn set_text_grows_but_never_shrinks() {
        let mut t = Text::with_width("short", Point::new(0, 0), 20, Attr::FG_GREY);
        assert_eq!(t.view().client_rect().extent, Size::new(20, 1));

        t.set_text("a\nb\nc");
        assert_eq!(t.view().client_rect().extent.height, 3);

        t.set_text("tiny");
        // Still 20x3.
        assert_eq!(t.view().client_rect().extent, Size::new(20, 3));

        let long = "x".repeat(30);
        t.set_text(&long);
        assert_eq!(t.view().client_rect().extent.width, 30);
    }

    #[test]
    fn append_keeps_per_character_attributes() {
        let mut t = Text::new("", Point::new(0, 0), Attr::FG_GREY);
        t.append_attr('A', Attr::FG_GREEN | Attr::FG_INTENSE);
        t.append_attr('B', Attr::FG_RED | Attr::FG_INTENSE);
        assert_eq!(t.contents()[0].attr, Attr::FG_GREEN | Attr::FG_INTENSE);
        assert_eq!(t.contents()[1].attr, Attr::FG_RED | Attr::FG_INTENSE);
        assert_eq!(t.text(), "AB");
    }
}
