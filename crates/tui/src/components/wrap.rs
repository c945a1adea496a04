//! Word wrapping for advice text measured in terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` on whitespace so no line is wider than `width` columns. Words
/// wider than a full line are split at character boundaries.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
	if width == 0 {
		return Vec::new();
	}

	let mut lines = Vec::new();
	let mut current = String::new();
	let mut current_width = 0;

	for word in text.split_whitespace() {
		let word_width = word.width();
		let needed = if current.is_empty() {
			word_width
		} else {
			current_width + 1 + word_width
		};

		if needed <= width {
			if !current.is_empty() {
				current.push(' ');
			}
			current.push_str(word);
			current_width = needed;
			continue;
		}

		if !current.is_empty() {
			lines.push(std::mem::take(&mut current));
			current_width = 0;
		}

		if word_width <= width {
			current.push_str(word);
			current_width = word_width;
			continue;
		}

		for ch in word.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if current_width + ch_width > width && !current.is_empty() {
				lines.push(std::mem::take(&mut current));
				current_width = 0;
			}
			current.push(ch);
			current_width += ch_width;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
