//! Test doubles for the terminal surface and keyboard source.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::Result;

use tui_hangman::geom::{Point, Size};
use tui_hangman::term::{DrawBuffer, KeyEvent, KeyboardSource, TerminalSurface, QUIT_CHAR};

/// Observable record of everything the loop did to the surface. Shared
/// with the test via `Rc` since the surface itself moves into the
/// application.
#[derive(Default)]
pub struct SurfaceLog {
    pub entered: bool,
    pub exited: bool,
    pub exit_after_enter: bool,
    pub flushes: usize,
    pub last_frame: Vec<char>,
    pub title: String,
}

pub struct FakeSurface {
    size: Size,
    cursor: Point,
    cursor_hidden: bool,
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl FakeSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            cursor: Point::new(0, 0),
            cursor_hidden: false,
            log: Rc::new(RefCell::new(SurfaceLog::default())),
        }
    }

    pub fn log_handle(&self) -> Rc<RefCell<SurfaceLog>> {
        Rc::clone(&self.log)
    }
}

impl TerminalSurface for FakeSurface {
    fn get_size(&mut self) -> Result<Size> {
        Ok(self.size)
    }

    fn set_size(&mut self, size: Size) -> Result<Size> {
        self.size = size;
        Ok(size)
    }

    fn get_cursor_pos(&mut self) -> Result<Point> {
        Ok(self.cursor)
    }

    fn set_cursor_pos(&mut self, pos: Point) -> Result<()> {
        self.cursor = pos;
        Ok(())
    }

    fn enable_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = false;
        Ok(())
    }

    fn disable_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }

    fn cursor_disabled(&self) -> bool {
        self.cursor_hidden
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.log.borrow_mut().title = title.to_string();
        Ok(())
    }

    fn restore_title(&mut self) -> Result<()> {
        self.log.borrow_mut().title.clear();
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        Ok(())
    }

    fn render_buffer(&mut self, buffer: &DrawBuffer) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.flushes += 1;
        log.last_frame = buffer.cells().iter().map(|c| c.glyph).collect();
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        self.log.borrow_mut().entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.exited = true;
        log.exit_after_enter = log.entered;
        Ok(())
    }
}

/// Keyboard that replays a fixed script, then yields the quit sentinel
/// forever so a runaway loop still terminates.
pub struct ScriptedKeyboard {
    events: VecDeque<char>,
}

impl ScriptedKeyboard {
    pub fn new(script: &str) -> Self {
        Self {
            events: script.chars().collect(),
        }
    }
}

impl KeyboardSource for ScriptedKeyboard {
    fn get_event(&mut self) -> Result<KeyEvent> {
        let character = self.events.pop_front().unwrap_or(QUIT_CHAR);
        Ok(KeyEvent {
            character,
            ..Default::default()
        })
    }

    fn clear(&mut self) -> Result<()> {
        // The script is intentional input, not stale events.
        Ok(())
    }
}
