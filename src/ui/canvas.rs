use std::io::{self, Write};
use std::time::Duration;

use crate::core::interrupt::Interrupt;
use crate::errors::Result;
use crate::ui::ansi::{CLEAR_SCREEN, CURSOR_HOME, HIDE_CURSOR, SHOW_CURSOR, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

/// Hides the cursor for as long as it lives.
pub struct CursorGuard;

impl CursorGuard {
    fn enter() -> Self {
        let mut out = io::stdout().lock();
        let _ = write!(out, "{HIDE_CURSOR}");
        let _ = out.flush();
        Self
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "{SHOW_CURSOR}");
        let _ = out.flush();
    }
}

/// Top-left corner of a centered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: usize,
    pub left: usize,
}

/// Drawing helpers shared by screens: clearing, centering, typing effects.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    util: WidthUtil,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            util: WidthUtil,
        }
    }

    /// `(columns, rows)` of the attached terminal.
    pub fn size(&self) -> (usize, usize) {
        self.util.terminal_size()
    }

    pub fn hide_cursor(&self) -> CursorGuard {
        CursorGuard::enter()
    }

    pub fn clear(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{CLEAR_SCREEN}{CURSOR_HOME}")?;
        out.flush()?;
        Ok(())
    }

    /// Where `lines` start when centered in an `area` of `(columns, rows)`.
    pub fn placement(&self, lines: &[String], area: (usize, usize)) -> Placement {
        let widest = lines
            .iter()
            .map(|l| self.util.visible_width(l))
            .max()
            .unwrap_or(0);
        Placement {
            top: self.util.center_pad(lines.len(), area.1),
            left: self.util.center_pad(widest, area.0),
        }
    }

    /// `lines` padded so that, printed from the top-left corner, they appear
    /// centered in `area`.
    pub fn center_block(&self, lines: &[String], area: (usize, usize)) -> String {
        let Placement { top, left } = self.placement(lines, area);
        let indent = " ".repeat(left);
        let body = lines
            .iter()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}{body}", "\n".repeat(top))
    }

    /// Clears the screen and draws `lines` centered.
    pub fn draw_centered(&self, lines: &[String]) -> Result<()> {
        let block = self.center_block(lines, self.size());
        let mut out = io::stdout().lock();
        write!(out, "{CLEAR_SCREEN}{CURSOR_HOME}{block}{STYLE_RESET}")?;
        out.flush()?;
        Ok(())
    }

    /// Prints `text` one character at a time, pausing `delay` after each.
    pub fn type_text(&self, text: &str, delay: Duration, interrupt: &Interrupt) -> Result<()> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let mut out = io::stdout().lock();
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            drop(out);
            interrupt.pause(delay)?;
        }
        Ok(())
    }

    /// Clears the screen and types `lines` centered.
    pub fn type_centered(
        &self,
        lines: &[String],
        delay: Duration,
        interrupt: &Interrupt,
    ) -> Result<()> {
        self.clear()?;
        let Placement { top, left } = self.placement(lines, self.size());
        let indent = " ".repeat(left);
        write!(io::stdout().lock(), "{}", "\n".repeat(top))?;
        for line in lines {
            write!(io::stdout().lock(), "{indent}")?;
            self.type_text(line, delay, interrupt)?;
            writeln!(io::stdout().lock())?;
        }
        io::stdout().flush()?;
        Ok(())
    }
}

/// Best-effort terminal reset after a screen was cancelled: clear the screen
/// and bring the cursor back. Errors are ignored.
pub fn restore_terminal() {
    let mut out = io::stdout().lock();
    let _ = write!(out, "{STYLE_RESET}{CLEAR_SCREEN}{CURSOR_HOME}{SHOW_CURSOR}");
    let _ = out.flush();
}
