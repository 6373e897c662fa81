//! TerminalRenderer: prints a text frame to a real terminal.
//!
//! Every draw clears the screen and reprints the whole frame, which is cheap
//! at this board size.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, QueueableCommand,
};

use crate::game_view::TextFrame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Clear the screen and print `frame` from the top-left corner.
    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Lines end in `\r\n` because raw mode disables newline translation.
pub fn encode_frame_into(frame: &TextFrame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    for (y, line) in frame.lines().iter().enumerate() {
        out.queue(Print(line))?;
        if y + 1 < frame.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}
