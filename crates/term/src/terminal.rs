//! Terminal setup, teardown, and panic safety.

use std::io::{self, Stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture, and hands back the ratatui terminal.
pub fn setup() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
	enable_raw_mode()?;
	let mut stdout = io::stdout();
	crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to its normal state. Safe to call more than
/// once; errors during restore are returned so the caller can report
/// them after the UI is gone.
pub fn restore() -> io::Result<()> {
	disable_raw_mode()?;
	crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
	Ok(())
}

/// Chains a terminal restore in front of the default panic hook so a
/// panic never leaves the user's shell in raw mode.
pub fn install_panic_hook() {
	let previous = std::panic::take_hook();
	std::panic::set_hook(Box::new(move |info| {
		let _ = restore();
		previous(info);
	}));
}
