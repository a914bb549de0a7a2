//! The screen surface boundary: terminal lifecycle, text output, key input.
//!
//! This is the only module with real side effects. Everything above it
//! programs against the [`Surface`] trait: views draw through it, the
//! controller acquires and releases it. Two implementations ship:
//! [`TerminalScreen`] wires the trait to a real terminal via crossterm,
//! [`MemoryScreen`] captures output in a character grid for tests.
//!
//! Convention: at most one `TerminalScreen` is live per process. The
//! terminal is process-global state and two raw-mode owners would fight
//! over it.

use std::collections::VecDeque;
use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::QueueableCommand;

use crate::theme::ColorPair;

// ============================================================================
// SURFACE CONTRACT
// ============================================================================

/// A character-cell screen: text writes at (row, col), blocking key reads,
/// and terminal-mode setup.
///
/// All operations are effects with no return value beyond errors, except
/// [`read_key`](Surface::read_key). Coordinates are row-first throughout.
pub trait Surface {
    /// Write `text` starting at the given cell.
    fn write_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;

    /// Write `text` in the foreground color registered for `pair`.
    fn write_styled(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        pair: ColorPair,
    ) -> io::Result<()>;

    /// Blank the entire screen.
    fn erase(&mut self) -> io::Result<()>;

    /// Make buffered writes visible.
    fn refresh(&mut self) -> io::Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Show or hide the cursor.
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Switch the terminal to raw (uncooked, no-echo) input.
    fn enable_raw_input(&mut self) -> io::Result<()>;

    /// Register the foreground color for a pair id, over the terminal's
    /// default background.
    fn define_color_pair(&mut self, pair: ColorPair, fg: Color) -> io::Result<()>;

    /// Undo terminal acquisition: cooked mode, cursor restored.
    ///
    /// Idempotent; the controller calls it on every loop exit path.
    fn release(&mut self) -> io::Result<()>;
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Restore the process terminal to normal mode.
///
/// Free function so the panic hook can reach it without a `TerminalScreen`
/// handle.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut out = io::stdout();
    out.queue(LeaveAlternateScreen)?;
    out.queue(Show)?;
    out.flush()
}

/// Install a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// REAL TERMINAL
// ============================================================================

/// [`Surface`] over the process terminal via crossterm.
///
/// Writes are queued and flushed on [`refresh`](Surface::refresh), one
/// visible update per present pass.
pub struct TerminalScreen {
    out: io::Stdout,
    /// Registered pair foregrounds, indexed by pair id.
    palette: [Option<Color>; 8],
    acquired: bool,
}

impl TerminalScreen {
    pub fn new() -> Self {
        TerminalScreen {
            out: io::stdout(),
            palette: [None; 8],
            acquired: false,
        }
    }

    fn pair_fg(&self, pair: ColorPair) -> Color {
        self.palette[pair.id() as usize].unwrap_or_else(|| pair.fg())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalScreen {
    fn write_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        // crossterm's MoveTo is (column, row)
        self.out.queue(MoveTo(col, row))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn write_styled(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        pair: ColorPair,
    ) -> io::Result<()> {
        self.out.queue(MoveTo(col, row))?;
        self.out.queue(SetForegroundColor(self.pair_fg(pair)))?;
        self.out.queue(Print(text))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn erase(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) => return Ok(key),
                _ => {} // ignore mouse, resize, focus, paste
            }
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(Show)?;
        } else {
            self.out.queue(Hide)?;
        }
        Ok(())
    }

    fn enable_raw_input(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.out.queue(EnterAlternateScreen)?;
        self.acquired = true;
        Ok(())
    }

    fn define_color_pair(&mut self, pair: ColorPair, fg: Color) -> io::Result<()> {
        self.palette[pair.id() as usize] = Some(fg);
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        if !self.acquired {
            return Ok(());
        }
        self.acquired = false;
        restore_terminal()
    }
}

// ============================================================================
// IN-MEMORY TEST SURFACE
// ============================================================================

/// [`Surface`] capturing output in a fixed `rows x cols` character grid.
///
/// Key reads are served from a scripted queue; an exhausted script reports
/// `UnexpectedEof`, which ends an event loop cleanly in tests. Writes past
/// the grid edge are clipped, as on a real terminal.
pub struct MemoryScreen {
    rows: u16,
    cols: u16,
    cells: Vec<Vec<char>>,
    script: VecDeque<KeyEvent>,
    /// Pairs registered via define_color_pair, in registration order.
    pub defined_pairs: Vec<(ColorPair, Color)>,
    pub refresh_count: usize,
    pub cursor_visible: bool,
    pub raw_input: bool,
    pub released: bool,
}

impl MemoryScreen {
    pub fn new(rows: u16, cols: u16) -> Self {
        MemoryScreen {
            rows,
            cols,
            cells: vec![vec![' '; cols as usize]; rows as usize],
            script: VecDeque::new(),
            defined_pairs: Vec::new(),
            refresh_count: 0,
            cursor_visible: true,
            raw_input: false,
            released: false,
        }
    }

    /// Queue key presses for [`read_key`](Surface::read_key) to return.
    pub fn script_keys(&mut self, keys: impl IntoIterator<Item = KeyEvent>) {
        self.script.extend(keys);
    }

    /// One screen row with trailing blanks trimmed.
    pub fn line(&self, row: u16) -> String {
        let s: String = self.cells[row as usize].iter().collect();
        s.trim_end().to_string()
    }

    /// All rows, trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|r| self.line(r)).collect()
    }
}

impl Surface for MemoryScreen {
    fn write_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        if row >= self.rows {
            return Ok(());
        }
        let line = &mut self.cells[row as usize];
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= self.cols as usize {
                break;
            }
            line[c] = ch;
        }
        Ok(())
    }

    fn write_styled(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        _pair: ColorPair,
    ) -> io::Result<()> {
        // styles are not modeled; capture the text
        self.write_text(row, col, text)
    }

    fn erase(&mut self) -> io::Result<()> {
        for line in &mut self.cells {
            line.fill(' ');
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.refresh_count += 1;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.script.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn enable_raw_input(&mut self) -> io::Result<()> {
        self.raw_input = true;
        Ok(())
    }

    fn define_color_pair(&mut self, pair: ColorPair, fg: Color) -> io::Result<()> {
        self.defined_pairs.push((pair, fg));
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        self.released = true;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn memory_screen_captures_text_at_position() {
        let mut screen = MemoryScreen::new(3, 10);
        screen.write_text(1, 2, "hi").unwrap();
        assert_eq!(screen.line(1), "  hi");
        assert_eq!(screen.line(0), "");
    }

    #[test]
    fn writes_past_the_edge_are_clipped() {
        let mut screen = MemoryScreen::new(2, 4);
        screen.write_text(0, 2, "abcdef").unwrap();
        screen.write_text(5, 0, "below").unwrap();
        assert_eq!(screen.line(0), "  ab");
        assert_eq!(screen.line(1), "");
    }

    #[test]
    fn erase_blanks_every_cell() {
        let mut screen = MemoryScreen::new(2, 5);
        screen.write_text(0, 0, "xxxxx").unwrap();
        screen.write_text(1, 0, "yyyyy").unwrap();
        screen.erase().unwrap();
        assert_eq!(screen.lines(), vec!["", ""]);
    }

    #[test]
    fn scripted_keys_come_back_in_order() {
        let mut screen = MemoryScreen::new(1, 1);
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        screen.script_keys([a, b]);
        assert_eq!(screen.read_key().unwrap(), a);
        assert_eq!(screen.read_key().unwrap(), b);
        assert!(screen.read_key().is_err());
    }

    #[test]
    fn define_color_pair_records_registration() {
        let mut screen = MemoryScreen::new(1, 1);
        screen
            .define_color_pair(ColorPair::Safe, ColorPair::Safe.fg())
            .unwrap();
        assert_eq!(screen.defined_pairs.len(), 1);
        assert_eq!(screen.defined_pairs[0].0, ColorPair::Safe);
    }
}
