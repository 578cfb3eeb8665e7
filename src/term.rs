use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue};
use tracing::warn;

use crate::grid::{Grid, Position};
use crate::input::{InputSource, Poll};
use crate::render::{FrameClock, Surface};

/// The game's window: an alternate terminal screen in raw mode.
pub struct TermManager {
    grid: Grid,
    cell_size: u16,
    background: Color,
    stdout: Stdout,
    clock: FrameClock,
}

impl TermManager {
    pub fn init(grid: Grid, cell_size: u16, title: &str) -> Result<Self> {
        let mut term = TermManager {
            grid,
            cell_size,
            background: Color::Reset,
            stdout: stdout(),
            clock: FrameClock::new(),
        };

        let (cols, rows) = terminal::size().context("Error reading terminal size")?;
        let (need_cols, need_rows) = term.size_in_chars();
        if cols < need_cols || rows < need_rows {
            warn!(cols, rows, need_cols, need_rows, "terminal is smaller than the board");
        }

        execute!(term.stdout, EnterAlternateScreen, SetTitle(title))
            .context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;

        Ok(term)
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(
            self.stdout,
            ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
        .context("Error leaving alt screen")?;
        Ok(())
    }

    fn size_in_chars(&self) -> (u16, u16) {
        (self.grid.width() as u16 * self.cell_size, self.grid.height() as u16)
    }
}

impl Surface for TermManager {
    fn clear(&mut self, background: Color) -> Result<()> {
        self.background = background;

        let (cols, rows) = self.size_in_chars();
        let blank = " ".repeat(cols as usize);

        queue!(self.stdout, SetBackgroundColor(background), terminal::Clear(ClearType::All))?;
        for y in 0..rows {
            queue!(self.stdout, cursor::MoveTo(0, y), Print(&blank))?;
        }
        Ok(())
    }

    fn draw_cell(&mut self, pos: Position, color: Color) -> Result<()> {
        if !self.grid.contains(pos) {
            return Ok(());
        }

        let x = pos.x as u16 * self.cell_size;
        let y = pos.y as u16;
        let block = " ".repeat(self.cell_size as usize);

        queue!(self.stdout, cursor::MoveTo(x, y), SetBackgroundColor(color), Print(block))?;
        Ok(())
    }

    fn draw_centered_text(&mut self, text: &str, color: Color) -> Result<()> {
        let (cols, rows) = self.size_in_chars();
        let len = text.chars().count() as u16;
        let x = cols.saturating_sub(len) / 2;

        queue!(
            self.stdout,
            cursor::MoveTo(x, rows / 2),
            SetBackgroundColor(self.background),
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.stdout, ResetColor)?;
        self.stdout.flush().context("Error flushing")?;
        Ok(())
    }

    fn throttle(&mut self, fps: u32) {
        self.clock.tick(fps);
    }
}

/// Keyboard events from the same terminal. Kept apart from `TermManager`
/// so the loop can borrow the screen and the keyboard at the same time.
pub struct TermInput;

impl InputSource for TermInput {
    fn poll(&mut self) -> Result<Poll> {
        let mut frame = Poll::default();

        while poll(Duration::ZERO).context("Error polling events")? {
            if let Event::Key(key) = read().context("Error reading event")? {
                frame.apply(&key);
            }
        }

        Ok(frame)
    }
}
