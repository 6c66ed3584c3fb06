// Full-screen frame output for the refresh loop

use crate::error::{BlinkyError, Result};
use crossterm::{
    cursor, execute, queue,
    terminal::{self, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Writes whole frames to `out`
///
/// With `redraw` on, the cursor is hidden while the sink lives and each frame
/// replaces the previous one. Without it, frames are appended as plain text.
pub struct TerminalSink<W: Write = io::Stdout> {
    out: W,
    redraw: bool,
}

impl TerminalSink {
    /// Sink on stdout; redraws only when stdout is a terminal
    pub fn stdout() -> Result<Self> {
        let redraw = io::stdout().is_terminal();
        if !redraw {
            log::debug!("stdout is not a terminal, writing plain frames");
        }
        Self::with_writer(io::stdout(), redraw)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn with_writer(mut out: W, redraw: bool) -> Result<Self> {
        if redraw {
            execute!(out, cursor::Hide)
                .map_err(|e| BlinkyError::terminal(format!("Failed to hide cursor: {}", e)))?;
        }
        Ok(Self { out, redraw })
    }

    /// Print `frame`, from the top-left corner of a cleared screen when redrawing
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        if self.redraw {
            queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
                .map_err(|e| BlinkyError::terminal(format!("Failed to clear screen: {}", e)))?;
        }

        writeln!(self.out, "{}", frame)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        // Always restore the cursor, even when the loop failed
        if self.redraw {
            let _ = execute!(self.out, cursor::Show);
        }
    }
}
