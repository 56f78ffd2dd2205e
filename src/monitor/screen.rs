//! Terminal capability used by the monitor redraw.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Last usable column and last visible row (both zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: u16,
    pub rows: u16,
}

/// Cursor and size operations the redraw needs.
pub trait Screen {
    fn dimensions(&self) -> Option<Dimensions>;

    /// Move the cursor to the top-left anchor.
    fn move_home(&mut self, out: &mut dyn Write) -> io::Result<()>;

    /// Clear everything from the start of `row` to the bottom, leaving the cursor there.
    fn clear_region(&mut self, out: &mut dyn Write, row: u16) -> io::Result<()>;
}

/// Crossterm-backed screen for an interactive terminal.
#[derive(Debug, Default)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn dimensions(&self) -> Option<Dimensions> {
        let (width, height) = terminal::size().ok()?;
        Some(Dimensions {
            columns: width.saturating_sub(1),
            rows: height.saturating_sub(1),
        })
    }

    fn move_home(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.queue(MoveTo(0, 0))?;
        Ok(())
    }

    fn clear_region(&mut self, out: &mut dyn Write, row: u16) -> io::Result<()> {
        out.queue(MoveTo(0, row))?.queue(Clear(ClearType::FromCursorDown))?;
        out.flush()
    }
}

/// Screen without a controlling terminal: no size, no cursor movement.
#[derive(Debug, Default)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn dimensions(&self) -> Option<Dimensions> {
        None
    }

    fn move_home(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn clear_region(&mut self, _out: &mut dyn Write, _row: u16) -> io::Result<()> {
        Ok(())
    }
}

/// Terminal screen when stdout is a TTY, otherwise the null screen.
pub fn detect() -> Box<dyn Screen> {
    if io::stdout().is_tty() {
        Box::new(TerminalScreen)
    } else {
        Box::new(NullScreen)
    }
}
