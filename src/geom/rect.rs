//! Rectangles: an origin plus an extent.

use crate::geom::{Point, Size};

/// A rectangle described by its top-left origin and its extent.
///
/// `right()` and `bottom()` are exclusive: a rect at (0,0) with extent
/// (80,25) covers columns 0..80 and rows 0..25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Point,
    pub extent: Size,
}

impl Rect {
    pub const fn new(origin: Point, extent: Size) -> Self {
        Self { origin, extent }
    }

    pub const fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            extent: Size::new(width, height),
        }
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.extent.width
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.extent.height
    }

    /// A rect with a degenerate extent covers no cells.
    pub fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// True when `other` lies entirely inside this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rects share at least one cell.
    pub fn touches(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// The overlapping region, or an empty rect when there is none.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return Rect::default();
        }
        Rect::at(left, top, right - left, bottom - top)
    }

    /// The smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::at(left, top, right - left, bottom - top)
    }

    /// Grow by `dx` cells on the left and right edges and `dy` on the top
    /// and bottom edges.
    pub fn expanded(&self, dx: i32, dy: i32) -> Rect {
        Rect::at(
            self.origin.x - dx,
            self.origin.y - dy,
            self.extent.width + dx * 2,
            self.extent.height + dy * 2,
        )
    }

    /// Shrink by `dx`/`dy` on each edge; the inverse of [`expanded`].
    ///
    /// [`expanded`]: Rect::expanded
    pub fn contracted(&self, dx: i32, dy: i32) -> Rect {
        self.expanded(-dx, -dy)
    }

    pub fn translated(&self, delta: Point) -> Rect {
        Rect::new(self.origin + delta, self.extent)
    }
}
