// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale descriptors and the catalog they are looked up from.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Code of the locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en";

/// Text layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	#[default]
	Ltr,
	Rtl,
}

impl Direction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	pub fn is_rtl(&self) -> bool {
		matches!(self, Direction::Rtl)
	}

	pub fn is_ltr(&self) -> bool {
		matches!(self, Direction::Ltr)
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Direction {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"ltr" => Ok(Direction::Ltr),
			"rtl" => Ok(Direction::Rtl),
			other => Err(format!("invalid direction: {other}")),
		}
	}
}

/// One supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDescriptor {
	/// Short identifier, e.g. "en", "fr", "ar".
	pub code: String,
	/// Display name in the locale's own language.
	pub name: String,
	pub direction: Direction,
	/// Decorative flag symbol.
	pub flag: String,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
}

fn default_enabled() -> bool {
	true
}

impl LocaleDescriptor {
	pub fn new(
		code: impl Into<String>,
		name: impl Into<String>,
		direction: Direction,
		flag: impl Into<String>,
	) -> Self {
		Self {
			code: code.into(),
			name: name.into(),
			direction,
			flag: flag.into(),
			enabled: true,
		}
	}

	pub fn is_rtl(&self) -> bool {
		self.direction.is_rtl()
	}
}

/// Ordered set of locale descriptors with exactly one default.
///
/// Lookups only see enabled descriptors; disabled entries are kept so that
/// listings can still show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
	locales: Vec<LocaleDescriptor>,
	default_index: usize,
}

impl LocaleCatalog {
	/// Build a catalog, rejecting empty lists, duplicate codes and a default
	/// that is missing or disabled.
	pub fn new(
		locales: Vec<LocaleDescriptor>,
		default_code: &str,
	) -> Result<Self, CatalogError> {
		if locales.is_empty() {
			return Err(CatalogError::Empty);
		}

		let mut seen = HashSet::new();
		for locale in &locales {
			if !seen.insert(locale.code.as_str()) {
				return Err(CatalogError::DuplicateCode(locale.code.clone()));
			}
		}

		let default_index = locales
			.iter()
			.position(|l| l.code == default_code && l.enabled)
			.ok_or_else(|| CatalogError::UnknownDefault(default_code.to_string()))?;

		Ok(Self {
			locales,
			default_index,
		})
	}

	/// English, French and Arabic, with English as the default.
	pub fn builtin() -> Self {
		Self {
			locales: vec![
				LocaleDescriptor::new("en", "English", Direction::Ltr, "🇺🇸"),
				LocaleDescriptor::new("fr", "Français", Direction::Ltr, "🇫🇷"),
				LocaleDescriptor::new("ar", "العربية", Direction::Rtl, "🇸🇦"),
			],
			default_index: 0,
		}
	}

	/// The same descriptors with a different default.
	pub fn with_default(self, default_code: &str) -> Result<Self, CatalogError> {
		Self::new(self.locales, default_code)
	}

	pub fn get(&self, code: &str) -> Option<&LocaleDescriptor> {
		self.locales.iter().find(|l| l.enabled && l.code == code)
	}

	pub fn is_supported(&self, code: &str) -> bool {
		self.get(code).is_some()
	}

	pub fn direction_of(&self, code: &str) -> Option<Direction> {
		self.get(code).map(|l| l.direction)
	}

	pub fn is_rtl(&self, code: &str) -> bool {
		self.direction_of(code).is_some_and(|d| d.is_rtl())
	}

	pub fn default_locale(&self) -> &LocaleDescriptor {
		&self.locales[self.default_index]
	}

	/// Enabled descriptors in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = &LocaleDescriptor> {
		self.locales.iter().filter(|l| l.enabled)
	}

	/// Every descriptor, including disabled ones.
	pub fn all(&self) -> &[LocaleDescriptor] {
		&self.locales
	}

	pub fn codes(&self) -> Vec<&str> {
		self.iter().map(|l| l.code.as_str()).collect()
	}
}

impl Default for LocaleCatalog {
	fn default() -> Self {
		Self::builtin()
	}
}
