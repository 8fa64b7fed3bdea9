use std::io;
use std::panic;
use std::thread;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Terminal the game draws into.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode, alternate-screen terminal held for one game session.
///
/// While the session is alive a panic leaves the alternate screen before the
/// panic report is printed. Dropping the session restores the terminal and the
/// default panic hook.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let terminal = match open_game_screen() {
            Ok(terminal) => terminal,
            Err(error) => {
                let _ = restore_terminal();
                return Err(error);
            }
        };

        chain_panic_hook(restore_terminal);
        debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // The hook cannot be swapped from a panicking thread; it already ran.
        if !thread::panicking() {
            release_panic_hook();
        }

        if let Err(error) = restore_terminal() {
            warn!("failed to restore terminal: {error}");
        } else {
            debug!("terminal session ended");
        }
    }
}

fn open_game_screen() -> io::Result<AppTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;
    raw_mode
}

/// Runs `restore` ahead of whatever panic hook is currently installed.
fn chain_panic_hook(restore: fn() -> io::Result<()>) {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        previous(panic_info);
    }));
}

/// Puts the default panic hook back.
fn release_panic_hook() {
    drop(panic::take_hook());
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::panic;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{chain_panic_hook, release_panic_hook};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn counting_restore() -> io::Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn panic_runs_restore_before_the_report() {
        chain_panic_hook(counting_restore);
        let result = panic::catch_unwind(|| panic!("board exploded"));
        release_panic_hook();

        assert!(result.is_err());
        assert!(RESTORES.load(Ordering::SeqCst) >= 1);
    }
}
