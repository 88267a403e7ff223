//! Frame: a bordered view with a title tab centered on the top edge.

use crate::geom::Rect;
use crate::term::{Attr, DrawBuffer};
use crate::views::view::{Renderable, View};

#[derive(Debug, Clone, Default)]
pub struct Frame {
    view: View,
    title: String,
}

impl Frame {
    pub fn new(area: Rect) -> Self {
        Self {
            view: View::new(area),
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_client_attribute(&mut self, attr: Attr) {
        self.view.set_client_attribute(attr);
    }

    pub fn set_inner_attribute(&mut self, attr: Attr) {
        self.view.set_inner_attribute(attr);
    }

    pub fn view(&self) -> &View {
        &self.view
    }
}

impl Renderable for Frame {
    fn render(&mut self, buf: &mut DrawBuffer) {
        let client = self.view.client_rect();
        let title_len = self.title.chars().count() as i32;

        // Center over the top border, nudged to an even column so the
        // title tab lines up with two-cell-wide content.
        let mut half = client.extent.width / 2 - title_len / 2;
        if half % 2 != 0 {
            half -= 1;
        }
        let half = half.max(2);

        self.view.paint(buf);

        if !self.title.is_empty() {
            let indent = buf.offset_of(client.origin) + half as usize;
            buf.move_text(indent, &self.title, self.view.client_attribute(), true);
        }
    }
}
