use crossterm::{execute, terminal, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

type ChartTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Owns the terminal while the candle chart is on screen. Raw mode and the
/// alternate screen are switched on in `new` and undone on `restore` or drop,
/// so an error while drawing still hands back a usable shell.
pub struct TerminalGuard {
    terminal: ChartTerminal,
    restored: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        let mut guard = Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
            restored: false,
        };
        guard.terminal.hide_cursor()?;
        Ok(guard)
    }

    /// Terminal the chart loop draws into.
    pub fn terminal_mut(&mut self) -> &mut ChartTerminal {
        &mut self.terminal
    }

    /// Leave the alternate screen and raw mode. Later calls are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.terminal.show_cursor()?;
        self.terminal
            .backend_mut()
            .execute(terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("Failed to restore terminal after chart: {}", err);
        }
    }
}
