//! Keyboard source: blocking key events for the application loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// ETX; the reserved immediate-quit sentinel (Ctrl+C maps to it).
pub const QUIT_CHAR: char = '\u{0003}';

/// One keyboard event. `character` is `'\0'` when the key has no
/// printable representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEvent {
    pub character: char,
    pub modifiers: u16,
    pub scancode: u16,
}

impl KeyEvent {
    /// True for events the loop should skip over.
    pub fn is_null(&self) -> bool {
        self.character == '\0'
    }
}

/// External collaborator producing keyboard events.
pub trait KeyboardSource {
    /// Block until the next event. No timeout: an indefinite block is
    /// decided behavior, since nothing else runs until a key arrives.
    fn get_event(&mut self) -> Result<KeyEvent>;

    /// Discard any stale queued events.
    fn clear(&mut self) -> Result<()>;
}

/// crossterm-backed keyboard source.
pub struct CrosstermKeyboard;

impl CrosstermKeyboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CrosstermKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardSource for CrosstermKeyboard {
    fn get_event(&mut self) -> Result<KeyEvent> {
        loop {
            let Event::Key(key) = event::read()? else {
                // Resize/focus/paste events surface as a null key so the
                // caller can decide whether to re-render.
                return Ok(KeyEvent::default());
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let character = match key.code {
                KeyCode::Char('c') | KeyCode::Char('C')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    QUIT_CHAR
                }
                KeyCode::Char(c) => c,
                KeyCode::Enter => '\n',
                _ => '\0',
            };

            return Ok(KeyEvent {
                character,
                modifiers: key.modifiers.bits() as u16,
                scancode: 0,
            });
        }
    }

    fn clear(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let _ = event::read()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_event_is_null() {
        assert!(KeyEvent::default().is_null());
        assert!(!KeyEvent {
            character: 'A',
            ..Default::default()
        }
        .is_null());
    }

    #[test]
    fn quit_sentinel_is_etx() {
        assert_eq!(QUIT_CHAR as u32, 3);
    }
}
