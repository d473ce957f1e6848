//! Error types for content loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading portfolio content.
#[derive(Debug, Error)]
pub enum ContentError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a content file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A language proficiency level is outside 0..=100.
	#[error("invalid proficiency level for '{name}': {level} (expected 0-100)")]
	InvalidLanguageLevel {
		/// Language the level belongs to.
		name: String,
		/// The out-of-range level.
		level: u32,
	},

	/// The section a record belongs to has no entries at all.
	#[error("empty content: no {0} entries")]
	Empty(&'static str),
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
