//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Full redraws only - the playfield is small enough that diffing buys
//! nothing at snake cadences. Output is queued into an internal buffer and
//! written with a single flush per frame to avoid tearing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::game_view::{Frame, Tile};

/// Two terminal columns per grid cell compensates for glyph aspect ratio.
const CELL_COLUMNS: u16 = 2;

const KEY_HINTS: &str = "arrows/wasd steer - space pauses - r restarts - q quits";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
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

    /// Draw a full frame: grid, status line, key hints, optional overlay.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();

        let side = frame.grid_count();
        for y in 0..side {
            self.buf.queue(cursor::MoveTo(0, y))?;
            for x in 0..side {
                match frame.tile(x, y) {
                    Tile::Empty => {
                        self.buf.queue(SetForegroundColor(Color::DarkGrey))?;
                        self.buf.queue(Print("· "))?;
                    }
                    Tile::Head => {
                        self.buf.queue(SetForegroundColor(Color::Red))?;
                        self.buf.queue(Print("██"))?;
                    }
                    Tile::Body => {
                        self.buf.queue(SetForegroundColor(Color::DarkRed))?;
                        self.buf.queue(Print("██"))?;
                    }
                    Tile::Apple => {
                        self.buf.queue(SetForegroundColor(Color::Green))?;
                        self.buf.queue(Print("██"))?;
                    }
                }
            }
        }

        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::MoveTo(0, side))?;
        self.buf.queue(Print(&frame.status))?;
        self.buf.queue(cursor::MoveTo(0, side + 1))?;
        self.buf.queue(SetForegroundColor(Color::DarkGrey))?;
        self.buf.queue(Print(KEY_HINTS))?;
        self.buf.queue(ResetColor)?;

        if let Some(overlay) = &frame.overlay {
            let row = side / 2;
            let grid_columns = side * CELL_COLUMNS;
            let col = grid_columns.saturating_sub(overlay.len() as u16) / 2;
            self.buf.queue(cursor::MoveTo(col, row))?;
            self.buf.queue(SetForegroundColor(Color::Black))?;
            self.buf.queue(SetBackgroundColor(Color::White))?;
            self.buf.queue(Print(overlay))?;
            self.buf.queue(ResetColor)?;
        }

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
