//! Low-level TUI mode switches used by `TerminalManager` and the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen with bracketed paste and mouse capture.
///
/// Mouse capture is what delivers clicks and pointer motion to the hit-area
/// registry.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )
}

/// Undo `enter_tui_mode` and raw mode. Errors are ignored so this is safe to
/// call more than once and from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Restore stdout to a usable state regardless of current mode.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
