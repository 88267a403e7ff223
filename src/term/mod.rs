//! Terminal cell model and compositor.
//!
//! Everything a frame is made of lives here: the 16-bit cell attribute
//! set, attributed cells and strings, the `DrawBuffer` compositor that
//! views render into, and the narrow external interfaces (terminal
//! surface, keyboard source) with their crossterm-backed implementations.
//!
//! Views never touch the terminal directly; they write cells into the
//! shared `DrawBuffer` and the application flushes it once per frame.

pub mod attr;
pub mod buffer;
pub mod cell;
pub mod keyboard;
pub mod surface;

pub use attr::Attr;
pub use buffer::DrawBuffer;
pub use cell::{ACell, AString, NUL};
pub use keyboard::{CrosstermKeyboard, KeyEvent, KeyboardSource, QUIT_CHAR};
pub use surface::{CrosstermSurface, TerminalSurface};
