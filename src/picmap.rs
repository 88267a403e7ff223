//! Picture maps: detachable rectangular cell grids.
//!
//! A `PicMap` is an independently sized row-major grid of attributed
//! cells representing a static image. It is copied by value into the
//! views that display it; the art compositor in `game::art` builds
//! staged pictures by layering overlays onto one.

use crate::geom::{Rect, Size};
use crate::term::{ACell, AString, Attr};

/// A rectangular sub-grid of attributed cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PicMap {
    area: Rect,
    data: AString,
}

impl PicMap {
    /// A blank picture (black background spaces) of the given extent.
    pub fn new(width: i32, height: i32) -> Self {
        let area = Rect::at(0, 0, width, height);
        Self {
            data: AString::filled(area.extent.offset(), ACell::blank(Attr::BG_BLACK)),
            area,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn extent(&self) -> Size {
        self.area.extent
    }

    pub fn width(&self) -> usize {
        self.area.extent.width.max(0) as usize
    }

    /// Cell count; always `extent().offset()`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &AString {
        &self.data
    }

    pub fn at(&self, index: usize) -> ACell {
        self.data[index]
    }

    pub fn at_mut(&mut self, index: usize) -> &mut ACell {
        &mut self.data[index]
    }

    /// Resize and blank out with spaces on black.
    pub fn set_size(&mut self, extent: Size) {
        self.area.extent = extent;
        self.data = AString::filled(extent.offset(), ACell::blank(Attr::BG_BLACK));
    }

    /// Repaint every cell's attribute from a starting offset onward,
    /// leaving glyphs alone.
    pub fn fill_from(&mut self, start: usize, attr: Attr) {
        for cell in &mut self.data.cells_mut()[start..] {
            cell.attr = attr;
        }
    }
}
