//! Terminal setup and teardown.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen, preserving the user's terminal content.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Restore the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored so cleanup always runs to
/// completion.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Aggressive restore for panic paths.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
