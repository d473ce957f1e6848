//! Portfolio content registry.
//!
//! All display data (who the portfolio belongs to, their experience,
//! projects, skills, certifications, education, languages and contact
//! details) lives here as plain records deserialized from TOML. The
//! registry is read-only for the lifetime of the process: it is loaded
//! once at startup and handed to the renderer as opaque display data.
//!
//! A default portfolio document is bundled into the binary; a user
//! file given on the command line replaces it wholesale. There is no
//! per-field merging, since a portfolio is a single coherent document.

pub mod error;
#[cfg(test)]
mod tests;

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub use error::{ContentError, Result};

/// Bundled default portfolio content.
const DEFAULT_PORTFOLIO: &str = include_str!("default_portfolio.toml");

/// A small label/value stat shown beside the hero portrait.
#[derive(Debug, Clone, Deserialize)]
pub struct Badge {
	pub label: String,
	pub value: String,
}

/// Identity and hero-banner data.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
	pub name: String,
	pub headline: String,
	pub summary: String,
	pub location: String,
	/// Availability pill shown above the headline.
	pub availability: String,
	/// Secondary availability chip (e.g. "Open to Internships").
	pub open_to: String,
	pub email: String,
	pub phone: String,
	pub linkedin: String,
	#[serde(default)]
	pub github: Option<String>,
	#[serde(default)]
	pub badges: Vec<Badge>,
}

/// A highlight card in the about section.
#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
	pub title: String,
	pub lines: Vec<String>,
}

/// The about section: prose plus highlight cards.
#[derive(Debug, Clone, Deserialize)]
pub struct About {
	pub paragraphs: Vec<String>,
	#[serde(default)]
	pub quote: Option<String>,
	#[serde(default)]
	pub highlights: Vec<Highlight>,
}

/// A single work-experience entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
	pub role: String,
	pub company: String,
	pub period: String,
	pub points: Vec<String>,
}

/// A portfolio project card.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub link: Option<String>,
	#[serde(default)]
	pub repo: Option<String>,
}

/// A named group of skills.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
	pub category: String,
	pub items: Vec<String>,
}

/// A certification or completed program.
#[derive(Debug, Clone, Deserialize)]
pub struct Certification {
	pub name: String,
	pub issuer: String,
	#[serde(default)]
	pub date: Option<String>,
}

/// Education details for the education section.
#[derive(Debug, Clone, Deserialize)]
pub struct Education {
	pub degree: String,
	pub field: String,
	pub period: String,
	#[serde(default)]
	pub completion: Option<String>,
	#[serde(default)]
	pub activities: Vec<String>,
	#[serde(default)]
	pub merits: Vec<String>,
}

/// A spoken language with a 0-100 proficiency level.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageSkill {
	pub name: String,
	pub level: u32,
}

impl LanguageSkill {
	/// Display label for the proficiency level: 100 is "Native",
	/// anything below is "Fluent".
	pub fn proficiency_label(&self) -> &'static str {
		if self.level >= 100 { "Native" } else { "Fluent" }
	}
}

/// Contact section content.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
	pub heading: String,
	pub pitch: String,
	pub email: String,
	pub phone: String,
	pub linkedin: String,
	#[serde(default)]
	pub note: Option<String>,
}

/// Footer line content.
#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
	pub name: String,
	#[serde(default)]
	pub tagline: Option<String>,
}

/// The complete, immutable portfolio document.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
	pub profile: Profile,
	pub about: About,
	#[serde(default)]
	pub experience: Vec<Experience>,
	#[serde(default)]
	pub projects: Vec<Project>,
	#[serde(default)]
	pub skills: Vec<SkillGroup>,
	#[serde(default)]
	pub certifications: Vec<Certification>,
	pub education: Education,
	#[serde(default)]
	pub languages: Vec<LanguageSkill>,
	#[serde(default)]
	pub interests: Vec<String>,
	pub contact: Contact,
	pub footer: Footer,
}

impl Registry {
	/// Parse a TOML string into a validated [`Registry`].
	pub fn parse(input: &str) -> Result<Self> {
		let registry: Registry = toml::from_str(input)?;
		registry.validate()?;
		Ok(registry)
	}

	/// Load portfolio content from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		debug!(path = %path.display(), "loading portfolio content");
		Self::parse(&content)
	}

	/// The portfolio bundled into the binary.
	pub fn bundled() -> Result<Self> {
		Self::parse(DEFAULT_PORTFOLIO)
	}

	fn validate(&self) -> Result<()> {
		for lang in &self.languages {
			if lang.level > 100 {
				return Err(ContentError::InvalidLanguageLevel {
					name: lang.name.clone(),
					level: lang.level,
				});
			}
		}
		if self.about.paragraphs.is_empty() {
			return Err(ContentError::Empty("about paragraph"));
		}
		Ok(())
	}
}
