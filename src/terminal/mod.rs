//! Terminal lifecycle with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into TUI mode on construction and
//! restores it when dropped. `setup_panic_hook` covers the unwinding path.
//!
//! ```no_run
//! use marquee::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // Terminal is restored when `manager` is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal when dropped. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
///
/// Setup order: raw mode, alternate screen, bracketed paste, mouse capture,
/// then a clear. The guard undoes all of it on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter TUI mode on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or any terminal command fails. Whatever
    /// was already enabled is rolled back before returning.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(err.into());
        }

        let guard = TerminalGuard::new();
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("terminal entered TUI mode");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> Result<ratatui::layout::Size> {
        Ok(self.terminal.size()?)
    }

    /// Restore the terminal ahead of drop.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
