//! Persistent navigation bar and the compact menu panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::app::App;

/// Below this terminal width the inline links collapse into the
/// compact menu toggle.
pub const COMPACT_BREAKPOINT: u16 = 80;

pub fn render_navbar(app: &App, frame: &mut Frame, area: Rect) {
	let nav = &app.theme.colors.nav;
	let state = app.tracker.state();

	// Transparent over the hero, elevated once scrolled.
	let bar_bg = if state.scrolled_past_threshold() {
		nav.bar_elevated_bg
	} else {
		nav.bar_bg
	};

	let brand = app
		.registry
		.profile
		.name
		.split_whitespace()
		.next()
		.unwrap_or("folio")
		.to_string();

	let mut spans = vec![
		Span::raw(" "),
		Span::styled(
			brand,
			Style::default().fg(nav.brand_fg).add_modifier(Modifier::BOLD),
		),
	];

	if area.width >= COMPACT_BREAKPOINT {
		for section in app.tracker.sections() {
			spans.push(Span::raw("   "));
			let active = state.active_section() == Some(section.id);
			let style = if active {
				Style::default()
					.fg(nav.link_active_fg)
					.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
			} else {
				Style::default().fg(nav.link_fg)
			};
			spans.push(Span::styled(section.display_name.to_string(), style));
		}
	} else {
		spans.push(Span::raw("   "));
		let toggle = if state.menu_open() { "✕ Close [m]" } else { "≡ Menu [m]" };
		spans.push(Span::styled(
			toggle.to_string(),
			Style::default().fg(nav.link_fg),
		));
	}

	let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(bar_bg));
	frame.render_widget(bar, area);
}

/// The expanded compact menu, drawn over the top of the body area.
/// Only rendered while the disclosure state is open.
pub fn render_menu_panel(app: &App, frame: &mut Frame, body: Rect) {
	let nav = &app.theme.colors.nav;
	let sections = app.tracker.sections();
	let height = (sections.len() as u16).min(body.height);
	if height == 0 {
		return;
	}
	let area = Rect {
		x: body.x,
		y: body.y,
		width: body.width,
		height,
	};
	frame.render_widget(Clear, area);

	let active = app.tracker.state().active_section();
	let lines: Vec<Line<'static>> = sections
		.iter()
		.take(height as usize)
		.map(|section| {
			let highlighted = section.order == app.menu_cursor;
			let marker = if active == Some(section.id) { "▌" } else { " " };
			let style = if highlighted {
				Style::default()
					.fg(nav.panel_active_fg)
					.bg(nav.panel_active_bg)
					.add_modifier(Modifier::BOLD)
			} else {
				Style::default().fg(nav.panel_fg).bg(nav.panel_bg)
			};
			Line::from(Span::styled(
				format!(
					" {marker} {} {:<width$}",
					section.order + 1,
					section.display_name,
					width = body.width as usize
				),
				style,
			))
		})
		.collect();

	frame.render_widget(
		Paragraph::new(lines).style(Style::default().bg(nav.panel_bg)),
		area,
	);
}
