//! View hierarchy: self-rendering rectangular UI regions.
//!
//! A view owns an outer (client) rect and an inner rect contracted by one
//! cell on each edge, with the ring between them reserved for a border.
//! `Frame`, `Text` and `Picture` are one-level specializations that paint
//! their content after (or instead of) the base rect painting; all of
//! them render into the shared `DrawBuffer` and never touch the terminal.

pub mod frame;
pub mod picture;
pub mod text;
pub mod view;

pub use frame::Frame;
pub use picture::Picture;
pub use text::{Text, TextAlign};
pub use view::{Renderable, View};
