// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Serialize;
use trellis_common_i18n::Direction;

use crate::locale_store::{LocaleChange, LocaleSnapshot};

/// Language and direction attributes of the rendered document.
///
/// Kept in step with the locale store by feeding it each [`LocaleChange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentAttributes {
	pub lang: String,
	pub dir: Direction,
}

impl DocumentAttributes {
	pub fn new(lang: impl Into<String>, dir: Direction) -> Self {
		Self { lang: lang.into(), dir }
	}

	pub fn from_snapshot(snapshot: &LocaleSnapshot) -> Self {
		Self::new(snapshot.locale.clone(), snapshot.direction)
	}

	pub fn apply(&mut self, change: &LocaleChange) {
		self.lang.clone_from(&change.locale);
		self.dir = change.direction;
	}

	/// Class carried by the body element; exactly one of `ltr` or `rtl`.
	pub fn body_class(&self) -> &'static str {
		self.dir.as_str()
	}

	/// `lang="…" dir="…"` for the root element.
	pub fn root_attributes(&self) -> String {
		format!(r#"lang="{}" dir="{}""#, self.lang, self.dir)
	}
}
