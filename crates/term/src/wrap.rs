//! Greedy word wrapping for document prose.

#[cfg(test)]
mod tests;

/// Wraps `text` into lines of at most `width` characters, breaking on
/// whitespace. Words longer than `width` are hard-broken. A zero width
/// is treated as one column so wrapping always terminates.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut lines = Vec::new();
	let mut current = String::new();

	for word in text.split_whitespace() {
		let mut word = word;
		// Hard-break words that can never fit on a line of their own.
		while word.chars().count() > width {
			if !current.is_empty() {
				lines.push(std::mem::take(&mut current));
			}
			let split = word
				.char_indices()
				.nth(width)
				.map(|(i, _)| i)
				.unwrap_or(word.len());
			lines.push(word[..split].to_string());
			word = &word[split..];
		}

		let current_len = current.chars().count();
		let word_len = word.chars().count();
		if current.is_empty() {
			current.push_str(word);
		} else if current_len + 1 + word_len <= width {
			current.push(' ');
			current.push_str(word);
		} else {
			lines.push(std::mem::take(&mut current));
			current.push_str(word);
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
