//! Bottom status line: key hints, messages, scroll position.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, MessageKind};

const HINTS: &str = "j/k scroll · m menu · tab next · 1-6 jump · p pdf · q quit";

pub fn render_status(app: &App, frame: &mut Frame, area: Rect) {
	let status = &app.theme.colors.status;

	let left: Span<'static> = match &app.message {
		Some(message) => {
			let fg = match message.kind {
				MessageKind::Info => status.message_fg,
				MessageKind::Error => status.error_fg,
			};
			Span::styled(message.text.clone(), Style::default().fg(fg))
		}
		None => Span::styled(HINTS.to_string(), Style::default().fg(status.dim_fg)),
	};

	let active = app
		.tracker
		.state()
		.active_section()
		.and_then(|id| app.tracker.sections().iter().find(|s| s.id == id))
		.map(|s| s.display_name)
		.unwrap_or("—");
	let right = format!(
		"{active}  {}/{}",
		app.scroll,
		app.layout.max_scroll(app.body_height)
	);

	let left_width = 1 + left.content.chars().count();
	let right_width = right.chars().count() + 1;
	let pad = (area.width as usize).saturating_sub(left_width + right_width);

	let line = Line::from(vec![
		Span::raw(" "),
		left,
		Span::raw(" ".repeat(pad)),
		Span::styled(right, Style::default().fg(status.fg)),
		Span::raw(" "),
	]);
	frame.render_widget(
		Paragraph::new(line).style(Style::default().bg(status.bg)),
		area,
	);
}
