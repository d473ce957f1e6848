//! Document composition and layout.
//!
//! The portfolio is composed once per width into a flat list of styled
//! rows, recording the absolute row of every section heading along the
//! way. Those rows are the section anchor positions the scroll tracker
//! reads: each tick the app turns them into a [`ScrollSnapshot`] of
//! viewport-relative offsets.

mod sections;
#[cfg(test)]
mod tests;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_content::Registry;
use folio_nav::{ScrollSnapshot, Section, SectionId};

use crate::theme::Theme;
use crate::wrap::wrap_text;

/// Left/right margin applied to every document row, in columns.
const MARGIN: usize = 2;

/// Vertical size the layout reports for one terminal row, in the pixel
/// units the tracker's geometry contract is written in (the activation
/// line sits 120 px below the viewport top, the navbar elevates past a
/// 20 px scroll). One cell maps to the classic 16 px text row.
pub(crate) const CELL_PX: i64 = 16;

/// The composed document: styled rows plus section anchor rows.
#[derive(Debug)]
pub struct DocumentLayout {
	lines: Vec<Line<'static>>,
	section_rows: Vec<(SectionId, usize)>,
}

impl DocumentLayout {
	/// Composes the full page (hero, sections in map order, footer)
	/// for the given terminal width.
	pub fn compose(
		registry: &Registry,
		sections: &[Section],
		width: u16,
		theme: &'static Theme,
	) -> Self {
		let mut composer = Composer::new(width, theme);
		composer.hero(&registry.profile);
		for section in sections {
			match section.id {
				"about" => composer.about(section, &registry.about),
				"experience" => composer.experience(section, &registry.experience),
				"projects" => composer.projects(section, &registry.projects),
				"skills" => composer.skills(section, &registry.skills, &registry.certifications),
				"education" => composer.education(
					section,
					&registry.education,
					&registry.languages,
					&registry.interests,
				),
				"contact" => composer.contact(section, &registry.contact),
				// Sections without a composer are simply not mounted.
				_ => {}
			}
		}
		composer.footer(&registry.footer);
		composer.finish()
	}

	/// All composed rows, top to bottom.
	pub fn lines(&self) -> &[Line<'static>] {
		&self.lines
	}

	/// Total document height in rows.
	pub fn height(&self) -> usize {
		self.lines.len()
	}

	/// Absolute row of a section's heading, if it was composed.
	pub fn section_row(&self, id: SectionId) -> Option<usize> {
		self.section_rows
			.iter()
			.find(|(anchor, _)| *anchor == id)
			.map(|(_, row)| *row)
	}

	/// Section anchors in document order.
	pub fn section_rows(&self) -> &[(SectionId, usize)] {
		&self.section_rows
	}

	/// Largest scroll offset that still fills a viewport of the given
	/// height.
	pub fn max_scroll(&self, viewport_height: usize) -> usize {
		self.height().saturating_sub(viewport_height)
	}

	/// Builds the scroll snapshot for the current offset: every
	/// composed anchor's top, relative to the viewport top, in the
	/// tracker's pixel units.
	pub fn snapshot(&self, scroll_offset: usize) -> ScrollSnapshot {
		let mut snapshot = ScrollSnapshot::new(scroll_offset as i64 * CELL_PX);
		for &(id, row) in &self.section_rows {
			let relative = (row as i64 - scroll_offset as i64) * CELL_PX;
			snapshot
				.record_section_top(id, relative.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
		}
		snapshot
	}
}

/// Accumulates styled rows while composing the document.
struct Composer {
	theme: &'static Theme,
	text_width: usize,
	lines: Vec<Line<'static>>,
	section_rows: Vec<(SectionId, usize)>,
}

impl Composer {
	fn new(width: u16, theme: &'static Theme) -> Self {
		Self {
			theme,
			text_width: (width as usize).saturating_sub(2 * MARGIN).clamp(24, 72),
			lines: Vec::new(),
			section_rows: Vec::new(),
		}
	}

	fn finish(self) -> DocumentLayout {
		DocumentLayout {
			lines: self.lines,
			section_rows: self.section_rows,
		}
	}

	fn blank(&mut self) {
		self.lines.push(Line::default());
	}

	/// Pushes one row, prefixed with the document margin.
	fn push(&mut self, mut spans: Vec<Span<'static>>) {
		spans.insert(0, Span::raw(" ".repeat(MARGIN)));
		self.lines.push(Line::from(spans));
	}

	fn line(&mut self, text: impl Into<String>, style: Style) {
		self.push(vec![Span::styled(text.into(), style)]);
	}

	/// Word-wraps prose into rows of document width.
	fn prose(&mut self, text: &str, style: Style) {
		for row in wrap_text(text, self.text_width) {
			self.line(row, style);
		}
	}

	/// A bulleted item: `prefix` on the first row, continuations
	/// aligned under the text.
	fn bullet(&mut self, prefix: &str, text: &str, prefix_style: Style, style: Style) {
		let hang = prefix.chars().count();
		let rows = wrap_text(text, self.text_width.saturating_sub(hang));
		for (i, row) in rows.into_iter().enumerate() {
			if i == 0 {
				self.push(vec![
					Span::styled(prefix.to_string(), prefix_style),
					Span::styled(row, style),
				]);
			} else {
				self.push(vec![
					Span::raw(" ".repeat(hang)),
					Span::styled(row, style),
				]);
			}
		}
	}

	/// Section heading: records the anchor row, then renders the title
	/// bar and its subtitle.
	fn section_heading(&mut self, section: &Section, subtitle: &str) {
		self.blank();
		self.blank();
		self.section_rows.push((section.id, self.lines.len()));
		let ui = &self.theme.colors.ui;
		self.push(vec![
			Span::styled("▌ ", Style::default().fg(ui.accent)),
			Span::styled(
				section.display_name.to_string(),
				Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
			),
		]);
		self.prose(subtitle, Style::default().fg(ui.dim_fg));
		self.blank();
	}

	/// Smaller heading inside a section.
	fn sub_heading(&mut self, text: &str) {
		let ui = &self.theme.colors.ui;
		self.blank();
		self.line(
			text.to_string(),
			Style::default().fg(ui.accent_alt).add_modifier(Modifier::BOLD),
		);
	}

	/// A row (or rows) of chip-styled labels, wrapped to width.
	fn chips(&mut self, items: &[String]) {
		let ui = &self.theme.colors.ui;
		let chip_style = Style::default().fg(ui.chip_fg).bg(ui.chip_bg);
		let mut spans: Vec<Span<'static>> = Vec::new();
		let mut used = 0usize;
		for item in items {
			let chip = format!(" {item} ");
			let chip_width = chip.chars().count() + 1;
			if used > 0 && used + chip_width > self.text_width {
				self.push(std::mem::take(&mut spans));
				used = 0;
			}
			if used > 0 {
				spans.push(Span::raw(" "));
			}
			spans.push(Span::styled(chip, chip_style));
			used += chip_width;
		}
		if !spans.is_empty() {
			self.push(spans);
		}
	}

	/// A full-width horizontal rule.
	fn rule(&mut self) {
		let ui = &self.theme.colors.ui;
		self.line(
			"─".repeat(self.text_width),
			Style::default().fg(ui.meter_track_fg),
		);
	}
}
