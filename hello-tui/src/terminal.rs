//! Terminal management
//!
//! `setup_terminal` puts the terminal into raw mode on the alternate
//! screen. `restore` undoes all of it, cursor included, and is shared by
//! the normal exit path and the panic hook.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Write the sequences that leave the alternate screen and show the cursor
pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Undo `setup_terminal` on stdout
///
/// Raw mode is disabled even if writing the escape sequences fails.
pub fn restore() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    leave_screen(&mut io::stdout())?;
    raw_mode
}

/// Drop the terminal and restore stdout
pub fn restore_terminal(terminal: Tui) -> Result<()> {
    drop(terminal);
    restore()?;
    Ok(())
}

/// Restore the terminal before the default panic report is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
