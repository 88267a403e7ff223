//! A small terminal text-UI toolkit and the hangman game built on it.
//!
//! The heart of the crate is [`term::DrawBuffer`], a double-buffered
//! grid of attributed cells that views render into and which is flushed
//! to the terminal in one batched write per frame. On top of it sit the
//! view widgets ([`views::Frame`], [`views::Text`], [`views::Picture`])
//! and the [`app::Application`] render/input loop. The [`game`] module
//! is the hangman state machine wired onto that loop.
//!
//! The terminal itself is only reached through the narrow
//! [`term::TerminalSurface`] and [`term::KeyboardSource`] traits, so
//! everything above them runs against fakes in tests.

pub mod app;
pub mod error;
pub mod game;
pub mod geom;
pub mod picmap;
pub mod term;
pub mod views;
