//! "Save as PDF" delegation to the host print spooler.
//!
//! The page itself never observes the outcome: the document is handed
//! to the spooler fire-and-forget, and the only user feedback is a
//! status message saying the hand-off happened.

use std::io::{self, Write as _};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::document::DocumentLayout;

/// Renders the composed document as plain text, one string per row.
pub fn document_text(layout: &DocumentLayout) -> String {
	let mut text = String::new();
	for line in layout.lines() {
		for span in &line.spans {
			text.push_str(&span.content);
		}
		text.push('\n');
	}
	text
}

/// Hands the document to the host spooler (`lp`). The child is reaped
/// on a background thread; its exit status is never surfaced.
pub fn spool(text: String) -> io::Result<()> {
	let mut child = Command::new("lp")
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()?;

	if let Some(mut stdin) = child.stdin.take() {
		stdin.write_all(text.as_bytes())?;
	}
	debug!(bytes = text.len(), "document handed to spooler");

	std::thread::spawn(move || {
		let _ = child.wait();
	});
	Ok(())
}
