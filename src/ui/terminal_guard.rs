use std::io::{self, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Restores the terminal on drop, including on unwind.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    // From here on the guard owns the terminal: an early error return
    // below drops it and restores raw mode.
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::TerminalGuard;

    #[test]
    fn guard_drop_tolerates_missing_tty() {
        // Restore must never panic, even when the process has no
        // terminal attached (the error-path drop in setup_terminal).
        drop(TerminalGuard);
    }
}
