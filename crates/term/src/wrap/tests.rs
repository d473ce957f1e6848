use super::*;

#[test]
fn basic_words() {
	assert_eq!(wrap_text("hello world", 6), vec!["hello", "world"]);
	assert_eq!(wrap_text("hello world", 11), vec!["hello world"]);
}

#[test]
fn greedy_fill() {
	assert_eq!(
		wrap_text("one two three four", 9),
		vec!["one two", "three", "four"]
	);
}

#[test]
fn long_word_is_hard_broken() {
	assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
}

#[test]
fn long_word_after_text_flushes_first() {
	assert_eq!(wrap_text("hi abcdefgh", 4), vec!["hi", "abcd", "efgh"]);
}

#[test]
fn empty_and_whitespace_only() {
	assert!(wrap_text("", 10).is_empty());
	assert!(wrap_text("   \t ", 10).is_empty());
}

#[test]
fn collapses_internal_whitespace() {
	assert_eq!(wrap_text("a   b\t c", 20), vec!["a b c"]);
}

#[test]
fn zero_width_still_terminates() {
	assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
}
