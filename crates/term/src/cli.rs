use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A portfolio page for your terminal")]
#[command(version)]
pub struct Cli {
	/// Portfolio content file (TOML); uses the bundled portfolio if omitted
	pub content: Option<PathBuf>,

	/// Color theme to use (slate, paper)
	#[arg(long, short = 't')]
	pub theme: Option<String>,

	/// Append logs to this file (the terminal itself is busy drawing)
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
