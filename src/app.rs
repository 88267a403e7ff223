//! Application loop: render, flush, read a key, dispatch callbacks.
//!
//! The loop is single-threaded and cooperative. Each iteration renders
//! every managed view into the shared draw buffer in registration order
//! (later views paint over earlier ones), flushes the buffer to the
//! terminal surface once, then blocks on the keyboard. The quit sentinel
//! (ETX) stops the loop immediately; any other printable key is handed
//! to every registered callback in registration order.
//!
//! The terminal surface and keyboard source are injected at construction
//! so the loop runs unchanged against fakes in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Context, Result};
use log::error;

use crate::error::EXIT_FAILURE;
use crate::geom::{Point, Size};
use crate::term::{Attr, DrawBuffer, KeyEvent, KeyboardSource, TerminalSurface, QUIT_CHAR};
use crate::views::Renderable;

/// Views are shared between the application and the game callbacks.
pub type SharedView = Rc<RefCell<dyn Renderable>>;

type KeyCallback = Box<dyn FnMut(char)>;

/// Wrap a view for registration with [`Application::add_view`].
pub fn shared<V: Renderable + 'static>(view: V) -> Rc<RefCell<V>> {
    Rc::new(RefCell::new(view))
}

/// Cloneable control handle; lets key callbacks stop the loop.
#[derive(Clone)]
pub struct AppHandle {
    running: Rc<Cell<bool>>,
    return_code: Rc<Cell<i32>>,
}

impl AppHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn stop_with_code(&self, code: i32) {
        self.return_code.set(code);
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Owns the view list, the draw buffer and the render/input cycle.
pub struct Application {
    surface: Box<dyn TerminalSurface>,
    keyboard: Box<dyn KeyboardSource>,
    buffer: DrawBuffer,
    views: Vec<SharedView>,
    key_callbacks: Vec<KeyCallback>,
    last_key: KeyEvent,
    current_key: KeyEvent,
    running: Rc<Cell<bool>>,
    return_code: Rc<Cell<i32>>,
}

impl Application {
    pub fn new(
        mut surface: Box<dyn TerminalSurface>,
        keyboard: Box<dyn KeyboardSource>,
    ) -> Result<Self> {
        let size = surface.get_size()?;
        Ok(Self {
            buffer: DrawBuffer::new(size),
            surface,
            keyboard,
            views: Vec::new(),
            key_callbacks: Vec::new(),
            last_key: KeyEvent::default(),
            current_key: KeyEvent::default(),
            running: Rc::new(Cell::new(false)),
            return_code: Rc::new(Cell::new(0)),
        })
    }

    /// Register a view. Registration order is z-order: later views are
    /// painted over earlier ones.
    pub fn add_view(&mut self, view: SharedView) {
        self.views.push(view);
    }

    /// Register a key callback, invoked for every non-quit key press.
    pub fn add_key_callback(&mut self, callback: impl FnMut(char) + 'static) {
        self.key_callbacks.push(Box::new(callback));
    }

    pub fn handle(&self) -> AppHandle {
        AppHandle {
            running: Rc::clone(&self.running),
            return_code: Rc::clone(&self.return_code),
        }
    }

    pub fn screen_size(&mut self) -> Result<Size> {
        self.surface.get_size()
    }

    /// Ask the terminal for a new size and resize the logical buffer to
    /// whatever the terminal settled on.
    pub fn set_screen_size(&mut self, size: Size) -> Result<()> {
        let settled = self.surface.set_size(size)?;
        self.buffer.resize_to(settled);
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.surface.set_title(title)
    }

    pub fn cursor_position(&mut self) -> Result<Point> {
        self.surface.get_cursor_pos()
    }

    pub fn set_cursor_position(&mut self, pos: Point) -> Result<()> {
        self.surface.set_cursor_pos(pos)
    }

    pub fn enable_cursor(&mut self) -> Result<()> {
        self.surface.enable_cursor()
    }

    pub fn disable_cursor(&mut self) -> Result<()> {
        self.surface.disable_cursor()
    }

    pub fn last_key(&self) -> KeyEvent {
        self.last_key
    }

    /// Run until [`stop`](Application::stop) is called or the quit key
    /// arrives. Returns the process exit code.
    ///
    /// The terminal is acquired on entry and released on every exit path;
    /// failures inside the cycle are logged after the release and map to
    /// a failure code instead of propagating.
    pub fn start(&mut self) -> Result<i32> {
        self.running.set(true);
        self.return_code.set(0);

        self.keyboard.clear()?;
        self.current_key = KeyEvent::default();

        if let Err(e) = self
            .surface
            .enter()
            .context("could not initialise the terminal")
        {
            let _ = self.surface.exit();
            return Err(e);
        }

        let result = self.run_cycle();

        if let Err(e) = self.surface.exit() {
            error!("terminal restore failed: {e:#}");
        }

        match result {
            Ok(()) => Ok(self.return_code.get()),
            Err(e) => {
                error!("application loop failed: {e:#}");
                Ok(EXIT_FAILURE)
            }
        }
    }

    pub fn stop(&mut self) {
        self.running.set(false);
    }

    fn run_cycle(&mut self) -> Result<()> {
        self.surface.clear_screen()?;
        self.buffer.clear(Attr::DEFAULT);

        while self.running.get() {
            for view in &self.views {
                view.borrow_mut().render(&mut self.buffer);
            }
            self.buffer.flush_to(self.surface.as_mut())?;

            // Skip null events (releases, resizes, non-printable keys).
            loop {
                self.last_key = self.current_key;
                self.current_key = self.keyboard.get_event()?;
                if !self.current_key.is_null() {
                    break;
                }
            }

            if self.current_key.character == QUIT_CHAR {
                break;
            }

            let ch = self.current_key.character;
            for callback in &mut self.key_callbacks {
                callback(ch);
            }
            self.current_key.character = '\0';
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_stop_clears_running() {
        let running = Rc::new(Cell::new(true));
        let handle = AppHandle {
            running: Rc::clone(&running),
            return_code: Rc::new(Cell::new(0)),
        };
        assert!(handle.is_running());
        handle.stop();
        assert!(!running.get());
    }

    #[test]
    fn stop_with_code_records_the_code() {
        let return_code = Rc::new(Cell::new(0));
        let handle = AppHandle {
            running: Rc::new(Cell::new(true)),
            return_code: Rc::clone(&return_code),
        };
        handle.stop_with_code(7);
        assert_eq!(return_code.get(), 7);
    }
}
