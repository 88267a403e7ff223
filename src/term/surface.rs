//! The terminal surface: the narrow interface the toolkit draws through.
//!
//! `TerminalSurface` is everything the compositor and application need
//! from a terminal. The crossterm implementation queues commands and
//! flushes once per operation, so a frame leaves the process as a single
//! batched write.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal, QueueableCommand,
};

use crate::geom::{Point, Size};
use crate::term::buffer::DrawBuffer;
use crate::term::cell::NUL;
use crate::term::Attr;

/// Attempts before giving up and accepting whatever size the terminal
/// settled on.
const RESIZE_RETRIES: usize = 10;

/// External collaborator owning the real console.
///
/// The draw buffer depends only on this interface (plus the cursor-state
/// query), which keeps the whole render path testable against a fake.
pub trait TerminalSurface {
    fn get_size(&mut self) -> Result<Size>;

    /// Request a terminal resize. Retried a bounded number of times; the
    /// returned size is whatever the terminal actually settled on and is
    /// what the logical buffer should be sized to.
    fn set_size(&mut self, size: Size) -> Result<Size>;

    fn get_cursor_pos(&mut self) -> Result<Point>;
    fn set_cursor_pos(&mut self, pos: Point) -> Result<()>;

    fn enable_cursor(&mut self) -> Result<()>;
    fn disable_cursor(&mut self) -> Result<()>;
    fn cursor_disabled(&self) -> bool;

    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Restore the pre-application title. Terminals offer no portable way
    /// to read the old title back, so this clears it.
    fn restore_title(&mut self) -> Result<()>;

    fn clear_screen(&mut self) -> Result<()>;

    /// One batched write of the entire cell grid.
    fn render_buffer(&mut self, buffer: &DrawBuffer) -> Result<()>;

    /// Acquire the terminal: raw mode, alternate screen, no line wrap.
    fn enter(&mut self) -> Result<()>;
    /// Release everything `enter` acquired. Must be safe to call on every
    /// exit path, including after a partial `enter`.
    fn exit(&mut self) -> Result<()>;
}

/// crossterm-backed terminal surface.
pub struct CrosstermSurface {
    stdout: io::Stdout,
    cursor_hidden: bool,
    entered: bool,
}

impl CrosstermSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            cursor_hidden: false,
            entered: false,
        }
    }
}

impl Default for CrosstermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface for CrosstermSurface {
    fn get_size(&mut self) -> Result<Size> {
        let (cols, rows) = terminal::size()?;
        Ok(Size::new(cols as i32, rows as i32))
    }

    fn set_size(&mut self, size: Size) -> Result<Size> {
        let cols = size.width.max(1) as u16;
        let rows = size.height.max(1) as u16;

        for _ in 0..RESIZE_RETRIES {
            self.stdout.queue(terminal::SetSize(cols, rows))?;
            self.stdout.flush()?;
            if terminal::size()? == (cols, rows) {
                return Ok(Size::new(cols as i32, rows as i32));
            }
        }

        // The terminal would not take the size; resize the logical buffer
        // to whatever it settled on instead.
        let (cols, rows) = terminal::size()?;
        log::warn!("terminal refused resize, settled on {}x{}", cols, rows);
        Ok(Size::new(cols as i32, rows as i32))
    }

    fn get_cursor_pos(&mut self) -> Result<Point> {
        let (x, y) = cursor::position()?;
        Ok(Point::new(x as i32, y as i32))
    }

    fn set_cursor_pos(&mut self, pos: Point) -> Result<()> {
        self.stdout
            .queue(cursor::MoveTo(pos.x.max(0) as u16, pos.y.max(0) as u16))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn enable_cursor(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()?;
        self.cursor_hidden = false;
        Ok(())
    }

    fn disable_cursor(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        self.cursor_hidden = true;
        Ok(())
    }

    fn cursor_disabled(&self) -> bool {
        self.cursor_hidden
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.stdout.queue(terminal::SetTitle(title))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn restore_title(&mut self) -> Result<()> {
        self.set_title("")
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn render_buffer(&mut self, buffer: &DrawBuffer) -> Result<()> {
        let width = buffer.width();
        if width == 0 {
            return Ok(());
        }

        let mut current: Option<Attr> = None;
        for (i, cell) in buffer.cells().iter().enumerate() {
            if i % width == 0 {
                self.stdout
                    .queue(cursor::MoveTo(0, (i / width) as u16))?;
            }
            if current != Some(cell.attr) {
                self.stdout.queue(SetColors(attr_to_colors(cell.attr)))?;
                current = Some(cell.attr);
            }
            let g = if cell.glyph == NUL { ' ' } else { cell.glyph };
            self.stdout.queue(Print(g))?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.queue(terminal::SetTitle(""))?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        self.cursor_hidden = false;
        self.entered = false;
        Ok(())
    }
}

/// Map the 16-bit attribute to the ANSI palette.
fn attr_to_colors(attr: Attr) -> Colors {
    Colors::new(
        half_to_color(
            attr.contains(Attr::FG_RED),
            attr.contains(Attr::FG_GREEN),
            attr.contains(Attr::FG_BLUE),
            attr.contains(Attr::FG_INTENSE),
        ),
        half_to_color(
            attr.contains(Attr::BG_RED),
            attr.contains(Attr::BG_GREEN),
            attr.contains(Attr::BG_BLUE),
            attr.contains(Attr::BG_INTENSE),
        ),
    )
}

fn half_to_color(r: bool, g: bool, b: bool, intense: bool) -> Color {
    match (r, g, b, intense) {
        (false, false, false, false) => Color::Black,
        (false, false, false, true) => Color::DarkGrey,
        (true, false, false, false) => Color::DarkRed,
        (true, false, false, true) => Color::Red,
        (false, true, false, false) => Color::DarkGreen,
        (false, true, false, true) => Color::Green,
        (false, false, true, false) => Color::DarkBlue,
        (false, false, true, true) => Color::Blue,
        (true, true, false, false) => Color::DarkYellow,
        (true, true, false, true) => Color::Yellow,
        (false, true, true, false) => Color::DarkCyan,
        (false, true, true, true) => Color::Cyan,
        (true, false, true, false) => Color::DarkMagenta,
        (true, false, true, true) => Color::Magenta,
        (true, true, true, false) => Color::Grey,
        (true, true, true, true) => Color::White,
    }
}
