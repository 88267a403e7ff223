//! Picture view: blits a picture map into its inner rect.

use crate::geom::{Point, Rect};
use crate::picmap::PicMap;
use crate::term::{Attr, DrawBuffer};
use crate::views::view::{Renderable, View};

/// A bordered view displaying a [`PicMap`].
///
/// There is no scaling: the picture's extent must equal the view's
/// inner-rect extent.
#[derive(Debug, Clone, Default)]
pub struct Picture {
    view: View,
    content: PicMap,
}

impl Picture {
    pub fn new(area: Rect) -> Self {
        let view = View::new(area);
        let inner = view.inner_rect().extent;
        Self {
            view,
            content: PicMap::new(inner.width, inner.height),
        }
    }

    /// Install new picture data (copied by value).
    pub fn set_picmap(&mut self, content: PicMap) {
        self.content = content;
    }

    pub fn picmap(&self) -> &PicMap {
        &self.content
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Repaint the picture's attributes without touching its glyphs.
    pub fn fill(&mut self, attr: Attr) {
        self.content.fill_from(0, attr);
    }
}

impl Renderable for Picture {
    fn render(&mut self, buf: &mut DrawBuffer) {
        let inner = self.view.inner_rect();
        debug_assert_eq!(inner.extent, self.content.extent());

        self.view.paint(buf);

        let mut idx = 0;
        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                let pos = buf.offset_of(Point::new(x, y));
                buf.put_achar(pos, self.content.at(idx));
                idx += 1;
            }
        }
    }
}
