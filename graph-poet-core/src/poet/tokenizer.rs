use std::sync::LazyLock;

use regex::Regex;

/// Runs of non-word characters. Word characters are ASCII only.
static NON_WORD_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Splits a corpus line into lower-cased word tokens.
///
/// - Lower-cases the whole line first
/// - Splits on runs of non-word characters (anything but ASCII letters, digits, `_`)
/// - Drops empty tokens (leading/trailing punctuation)
pub fn tokenize(line: &str) -> Vec<String> {
	let lowered = line.to_lowercase();
	NON_WORD_RE
		.split(&lowered)
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Tokenizes several lines into one flat sequence.
///
/// Line boundaries are not kept: the last token of a line is directly
/// followed by the first token of the next one.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	lines
		.into_iter()
		.flat_map(|line| tokenize(line.as_ref()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tokenize_lowercases_and_strips_punctuation() {
		assert_eq!(tokenize("Hello, cruel World!"), vec!["hello", "cruel", "world"]);
	}

	#[test]
	fn test_tokenize_empty_and_punctuation_only() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  ...!?  ").is_empty());
	}

	#[test]
	fn test_tokenize_keeps_digits_and_underscores() {
		assert_eq!(tokenize("route_66 -- is 2 far"), vec!["route_66", "is", "2", "far"]);
	}

	#[test]
	fn test_tokenize_splits_apostrophes() {
		assert_eq!(tokenize("Don't stop"), vec!["don", "t", "stop"]);
	}

	#[test]
	fn test_tokenize_non_ascii_letters_split_words() {
		assert_eq!(tokenize("Café au lait"), vec!["caf", "au", "lait"]);
		assert_eq!(tokenize("Été À Paris"), vec!["t", "paris"]);
		assert_eq!(tokenize("naïve"), vec!["na", "ve"]);
	}

	#[test]
	fn test_tokenize_lines_joins_across_lines() {
		let tokens = tokenize_lines(["The quick", "", "brown. Fox"]);
		assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
	}
}
