//! Base view: a bordered rectangular region.

use crate::geom::Rect;
use crate::term::{Attr, DrawBuffer};

/// Anything the application loop can paint into the draw buffer.
pub trait Renderable {
    fn render(&mut self, buf: &mut DrawBuffer);
}

/// Default attribute for the client (outer, bordered) area.
pub const DEFAULT_CLIENT_ATTR: Attr = Attr::FG_WHITE.union(Attr::BG_BLUE);
/// Default attribute for the inner area.
pub const DEFAULT_INNER_ATTR: Attr = Attr::FG_GREY.union(Attr::BG_BLUE);

/// A rectangular region with an outer client rect and an inner rect
/// contracted by one cell per edge. The ring between the two is always
/// reserved; whether it is decorated is controlled by `draw_border`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    client_rect: Rect,
    inner_rect: Rect,
    client_attr: Attr,
    inner_attr: Attr,
    draw_border: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            client_rect: Rect::default(),
            inner_rect: Rect::default(),
            client_attr: DEFAULT_CLIENT_ATTR,
            inner_attr: DEFAULT_INNER_ATTR,
            draw_border: true,
        }
    }
}

impl View {
    pub fn new(area: Rect) -> Self {
        Self {
            client_rect: area,
            inner_rect: area.contracted(1, 1),
            ..Self::default()
        }
    }

    pub fn with_attrs(area: Rect, client_attr: Attr, inner_attr: Attr) -> Self {
        Self {
            client_rect: area,
            inner_rect: area.contracted(1, 1),
            client_attr,
            inner_attr,
            draw_border: true,
        }
    }

    pub fn client_rect(&self) -> Rect {
        self.client_rect
    }

    pub fn inner_rect(&self) -> Rect {
        self.inner_rect
    }

    pub fn client_rect_mut(&mut self) -> &mut Rect {
        &mut self.client_rect
    }

    pub fn inner_rect_mut(&mut self) -> &mut Rect {
        &mut self.inner_rect
    }

    pub fn client_attribute(&self) -> Attr {
        self.client_attr
    }

    pub fn inner_attribute(&self) -> Attr {
        self.inner_attr
    }

    pub fn set_client_attribute(&mut self, attr: Attr) {
        self.client_attr = attr;
    }

    pub fn set_inner_attribute(&mut self, attr: Attr) {
        self.inner_attr = attr;
    }

    pub fn draws_border(&self) -> bool {
        self.draw_border
    }

    pub fn set_draw_border(&mut self, flag: bool) {
        self.draw_border = flag;
    }

    /// Paint the client rect (decorated when `draw_border` is set) and
    /// the inner rect fill. Specializations call this first, then paint
    /// their own content on top.
    pub fn paint(&self, buf: &mut DrawBuffer) {
        buf.draw_rect(
            &self.client_rect,
            self.client_attr,
            self.client_attr,
            self.draw_border,
        );
        buf.draw_rect(&self.inner_rect, self.inner_attr, self.inner_attr, false);
    }
}

impl Renderable for View {
    fn render(&mut self, buf: &mut DrawBuffer) {
        self.paint(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Size;
    use crate::term::buffer::glyph;

    #[test]
    fn inner_rect_is_contracted_by_one() {
        let v = View::new(Rect::at(0, 0, 10, 5));
        assert_eq!(v.inner_rect(), Rect::at(1, 1, 8, 3));
    }

    #[test]
    fn paint_draws_border_and_fills_inner() {
        let mut buf = DrawBuffer::new(Size::new(10, 5));
        let mut v = View::new(Rect::at(0, 0, 10, 5));
        v.render(&mut buf);

        assert_eq!(buf.cells()[0].glyph, glyph::TOP_LEFT);
        assert_eq!(buf.cells()[9].glyph, glyph::TOP_RIGHT);
        // Inner cell at (1,1).
        assert_eq!(buf.cells()[11].attr, DEFAULT_INNER_ATTR);
        assert_eq!(buf.cells()[11].glyph, ' ');
    }

    #[test]
    fn borderless_view_blanks_its_ring() {
        let mut buf = DrawBuffer::new(Size::new(10, 5));
        let mut v = View::new(Rect::at(0, 0, 10, 5));
        v.set_draw_border(false);
        v.render(&mut buf);
        assert_eq!(buf.cells()[0].glyph, ' ');
        assert_eq!(buf.cells()[0].attr, DEFAULT_CLIENT_ATTR);
    }
}
