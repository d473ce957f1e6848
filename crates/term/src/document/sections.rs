//! Per-section row builders for the portfolio document.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use folio_content::{
	About, Certification, Contact, Education, Experience, Footer, LanguageSkill, Profile, Project,
	SkillGroup,
};
use folio_nav::Section;

use super::Composer;

/// Width of the language proficiency meter, in cells.
const METER_WIDTH: usize = 20;

impl Composer {
	pub(super) fn hero(&mut self, profile: &Profile) {
		let ui = &self.theme.colors.ui;
		self.blank();
		self.line(
			format!("• {}", profile.availability),
			Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
		);
		self.blank();
		self.line(
			profile.headline.clone(),
			Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
		);
		self.blank();
		self.prose(&profile.summary, Style::default().fg(ui.fg));
		self.blank();
		self.chips(&[profile.location.clone(), profile.open_to.clone()]);
		for badge in &profile.badges {
			self.push(vec![
				Span::styled(format!("{}: ", badge.label), Style::default().fg(ui.dim_fg)),
				Span::styled(
					badge.value.clone(),
					Style::default().fg(ui.fg).add_modifier(Modifier::BOLD),
				),
			]);
		}
		self.blank();
		self.line(
			format!("in  {}", profile.linkedin),
			Style::default().fg(ui.accent),
		);
		if let Some(github) = &profile.github {
			self.line(format!("gh  {github}"), Style::default().fg(ui.accent));
		}
	}

	pub(super) fn about(&mut self, section: &Section, about: &About) {
		let ui = &self.theme.colors.ui;
		self.section_heading(section, "A brief overview of my professional identity and goals.");
		for paragraph in &about.paragraphs {
			self.prose(paragraph, Style::default().fg(ui.fg));
			self.blank();
		}
		if let Some(quote) = &about.quote {
			self.bullet(
				"┃ ",
				&format!("\"{quote}\""),
				Style::default().fg(ui.accent),
				Style::default().fg(ui.quote_fg).add_modifier(Modifier::ITALIC),
			);
			self.blank();
		}
		for highlight in &about.highlights {
			let mut spans = vec![Span::styled(
				format!("{:<14}", highlight.title),
				Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
			)];
			spans.push(Span::styled(
				highlight.lines.join(" "),
				Style::default().fg(ui.dim_fg),
			));
			self.push(spans);
		}
	}

	pub(super) fn experience(&mut self, section: &Section, entries: &[Experience]) {
		let ui = &self.theme.colors.ui;
		self.section_heading(section, "My journey in engineering and leadership roles.");
		for (i, entry) in entries.iter().enumerate() {
			if i > 0 {
				self.blank();
			}
			self.push(vec![
				Span::styled("● ", Style::default().fg(ui.accent)),
				Span::styled(
					entry.role.clone(),
					Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
				),
			]);
			self.push(vec![
				Span::styled("│ ", Style::default().fg(ui.meter_track_fg)),
				Span::styled(entry.company.clone(), Style::default().fg(ui.accent)),
				Span::styled(
					format!("  {}", entry.period),
					Style::default().fg(ui.dim_fg),
				),
			]);
			for point in &entry.points {
				self.bullet(
					"│ › ",
					point,
					Style::default().fg(ui.meter_track_fg),
					Style::default().fg(ui.fg),
				);
			}
		}
	}

	pub(super) fn projects(&mut self, section: &Section, projects: &[Project]) {
		let ui = &self.theme.colors.ui;
		self.section_heading(
			section,
			"Showcasing my technical implementations and marketing initiatives.",
		);
		for (i, project) in projects.iter().enumerate() {
			if i > 0 {
				self.blank();
			}
			self.line(
				project.title.clone(),
				Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
			);
			self.chips(&project.tags);
			self.prose(&project.description, Style::default().fg(ui.fg));
			if let Some(link) = &project.link {
				self.line(format!("↗ {link}"), Style::default().fg(ui.accent));
			}
			if let Some(repo) = &project.repo {
				self.line(format!("↗ {repo}"), Style::default().fg(ui.accent));
			}
		}
	}

	pub(super) fn skills(
		&mut self,
		section: &Section,
		groups: &[SkillGroup],
		certifications: &[Certification],
	) {
		let ui = &self.theme.colors.ui;
		self.section_heading(section, "The tools and methodologies I've mastered.");
		for (i, group) in groups.iter().enumerate() {
			if i > 0 {
				self.blank();
			}
			self.line(
				group.category.clone(),
				Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
			);
			self.chips(&group.items);
		}
		if !certifications.is_empty() {
			self.sub_heading("Certifications");
			for cert in certifications {
				let mut text = format!("{} — {}", cert.name, cert.issuer);
				if let Some(date) = &cert.date {
					text.push_str(&format!(" ({date})"));
				}
				self.bullet(
					"✦ ",
					&text,
					Style::default().fg(ui.accent_alt),
					Style::default().fg(ui.fg),
				);
			}
		}
	}

	pub(super) fn education(
		&mut self,
		section: &Section,
		education: &Education,
		languages: &[LanguageSkill],
		interests: &[String],
	) {
		let ui = &self.theme.colors.ui;
		self.section_heading(section, "Academic background, languages, and interests.");
		self.line(
			education.degree.clone(),
			Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
		);
		self.line(education.field.clone(), Style::default().fg(ui.accent));
		let mut period = education.period.clone();
		if let Some(completion) = &education.completion {
			period.push_str(&format!("  ·  {completion}"));
		}
		self.line(period, Style::default().fg(ui.dim_fg));

		if !education.activities.is_empty() {
			self.sub_heading("Key Activities");
			for activity in &education.activities {
				self.bullet(
					"• ",
					activity,
					Style::default().fg(ui.accent),
					Style::default().fg(ui.fg),
				);
			}
		}
		if !education.merits.is_empty() {
			self.sub_heading("Academic Merit");
			for merit in &education.merits {
				self.bullet(
					"★ ",
					merit,
					Style::default().fg(ui.accent),
					Style::default().fg(ui.fg),
				);
			}
		}

		if !languages.is_empty() {
			self.sub_heading("Languages");
			for language in languages {
				let filled = (language.level as usize * METER_WIDTH) / 100;
				self.push(vec![
					Span::styled(
						format!("{:<10}", language.name),
						Style::default().fg(ui.fg),
					),
					Span::styled("█".repeat(filled), Style::default().fg(ui.meter_fg)),
					Span::styled(
						"░".repeat(METER_WIDTH - filled),
						Style::default().fg(ui.meter_track_fg),
					),
					Span::styled(
						format!("  {}", language.proficiency_label()),
						Style::default().fg(ui.dim_fg),
					),
				]);
			}
		}

		if !interests.is_empty() {
			self.sub_heading("Personal Interests");
			self.chips(interests);
		}
	}

	pub(super) fn contact(&mut self, section: &Section, contact: &Contact) {
		let ui = &self.theme.colors.ui;
		self.section_heading(section, "Get in touch.");
		self.line(
			contact.heading.clone(),
			Style::default().fg(ui.heading_fg).add_modifier(Modifier::BOLD),
		);
		self.blank();
		self.prose(&contact.pitch, Style::default().fg(ui.fg));
		self.blank();
		self.push(vec![
			Span::styled("✉  ", Style::default().fg(ui.accent)),
			Span::styled(contact.email.clone(), Style::default().fg(ui.fg)),
		]);
		self.push(vec![
			Span::styled("☎  ", Style::default().fg(ui.accent)),
			Span::styled(contact.phone.clone(), Style::default().fg(ui.fg)),
		]);
		self.push(vec![
			Span::styled("in ", Style::default().fg(ui.accent)),
			Span::styled(contact.linkedin.clone(), Style::default().fg(ui.fg)),
		]);
		self.blank();
		self.line(
			"[p] Save Portfolio as PDF".to_string(),
			Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
		);
		if let Some(note) = &contact.note {
			self.prose(note, Style::default().fg(ui.dim_fg));
		}
	}

	pub(super) fn footer(&mut self, footer: &Footer) {
		let ui = &self.theme.colors.ui;
		self.blank();
		self.blank();
		self.rule();
		let mut line = format!("© {}.", footer.name);
		if let Some(tagline) = &footer.tagline {
			line.push_str(&format!(" {tagline}"));
		}
		self.line(line, Style::default().fg(ui.dim_fg));
		self.blank();
	}
}
