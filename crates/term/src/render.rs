//! Frame rendering: navbar, body viewport, menu panel, status line.

mod navbar;
mod status;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, NAVBAR_HEIGHT, STATUS_HEIGHT};

pub fn render(app: &App, frame: &mut Frame) {
	let area = frame.area();
	let bg = Block::default().style(Style::default().bg(app.theme.colors.ui.bg));
	frame.render_widget(bg, area);

	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(NAVBAR_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(STATUS_HEIGHT),
		])
		.split(area);

	navbar::render_navbar(app, frame, chunks[0]);
	render_body(app, frame, chunks[1]);
	if app.tracker.state().menu_open() {
		navbar::render_menu_panel(app, frame, chunks[1]);
	}
	status::render_status(app, frame, chunks[2]);
}

/// The visible slice of the composed document.
fn render_body(app: &App, frame: &mut Frame, area: Rect) {
	let height = app.layout.height();
	let start = app.scroll.min(height);
	let end = (start + area.height as usize).min(height);
	let lines = app.layout.lines()[start..end].to_vec();
	frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
