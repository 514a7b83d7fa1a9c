// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Turn a raw URL segment or literal label into a display title.
///
/// A word break is inserted before every upper-case letter that starts a
/// lower-case run, `-` and `_` become spaces, runs of whitespace collapse to
/// one space, and each word is capitalized with the remainder lower-cased.
///
/// ```
/// use trellis_nav_core::format_title;
///
/// assert_eq!(format_title("userProfile"), "User Profile");
/// assert_eq!(format_title("audit-log_v2"), "Audit Log V2");
/// ```
pub fn format_title(segment: &str) -> String {
	let chars: Vec<char> = segment.chars().collect();
	let mut spaced = String::with_capacity(segment.len() + 4);

	for (i, &c) in chars.iter().enumerate() {
		let starts_word = c.is_ascii_uppercase()
			&& chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
		if starts_word && !spaced.is_empty() && !spaced.ends_with(char::is_whitespace) {
			spaced.push(' ');
		}
		if c == '-' || c == '_' {
			spaced.push(' ');
		} else {
			spaced.push(c);
		}
	}

	spaced
		.split_whitespace()
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => {
			let rest = chars.as_str().to_lowercase();
			first.to_uppercase().chain(rest.chars()).collect()
		}
		None => String::new(),
	}
}
