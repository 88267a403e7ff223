//! Geometry value types.
//!
//! `Point`, `Size` and `Rect` are plain copyable values; arithmetic always
//! produces new values. Screen coordinates are signed so intermediate math
//! (contraction, deltas) cannot underflow.

pub mod point;
pub mod rect;
pub mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
