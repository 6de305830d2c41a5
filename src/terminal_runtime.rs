use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one run.
///
/// On drop, restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to the alternate screen, and creates a
    /// ratatui terminal. Partial failures roll the terminal back.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal_best_effort();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal_best_effort();
    }
}

/// Chains a terminal restore in front of the default panic hook, so a panic
/// inside the draw loop does not leave the shell in raw mode.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn restore_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
