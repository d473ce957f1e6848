mod app;
mod cli;
mod document;
mod print;
mod render;
mod terminal;
mod theme;
mod wrap;

use anyhow::{Context, anyhow};
use clap::Parser;

use cli::Cli;
use folio_content::Registry;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(&cli)?;

	let registry = match &cli.content {
		Some(path) => Registry::load(path)?,
		None => Registry::bundled()?,
	};

	let theme = match cli.theme.as_deref() {
		Some(id) => theme::get_theme(id).ok_or_else(|| {
			anyhow!(
				"unknown theme '{id}' (available: {})",
				theme::theme_ids().join(", ")
			)
		})?,
		None => &theme::SLATE,
	};

	terminal::install_panic_hook();
	let mut term = terminal::setup().context("failed to initialize terminal")?;
	let size = term.size()?;
	let mut app = app::App::new(registry, theme, size.width, size.height);

	let result = app::run(&mut app, &mut term);

	terminal::restore()?;
	result?;
	Ok(())
}

/// Logging goes to a file, and only when asked for: the terminal is
/// owned by the page.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
	let Some(path) = &cli.log_file else {
		return Ok(());
	};
	let file = std::fs::File::options()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::sync::Mutex::new(file))
		.with_ansi(false)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}
