// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use serde::Serialize;
use tracing::{debug, warn};

use crate::cookie::cookie_value;
use crate::locale::{Direction, LocaleCatalog, LocaleDescriptor};

/// Where a resolved locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSource {
	Cookie,
	Default,
}

impl LocaleSource {
	pub fn as_str(&self) -> &'static str {
		match self {
			LocaleSource::Cookie => "cookie",
			LocaleSource::Default => "default",
		}
	}
}

/// Outcome of resolving a candidate locale against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale<'a> {
	pub descriptor: &'a LocaleDescriptor,
	pub source: LocaleSource,
	/// The candidate value when it was present but not supported.
	pub rejected: Option<String>,
}

impl ResolvedLocale<'_> {
	pub fn code(&self) -> &str {
		&self.descriptor.code
	}

	pub fn direction(&self) -> Direction {
		self.descriptor.direction
	}
}

/// Resolve the effective locale from a candidate value.
///
/// Resolution order (highest to lowest priority):
/// 1. The candidate (usually the persisted cookie), if supported
/// 2. The catalog default
///
/// # Example
///
/// ```
/// use trellis_common_i18n::{resolve_locale, LocaleCatalog};
///
/// let catalog = LocaleCatalog::builtin();
/// assert_eq!(resolve_locale(&catalog, Some("fr")).code(), "fr");
/// assert_eq!(resolve_locale(&catalog, None).code(), "en");
/// assert_eq!(resolve_locale(&catalog, Some("invalid")).code(), "en");
/// ```
pub fn resolve_locale<'a>(catalog: &'a LocaleCatalog, candidate: Option<&str>) -> ResolvedLocale<'a> {
	if let Some(code) = candidate {
		if let Some(descriptor) = catalog.get(code) {
			return ResolvedLocale {
				descriptor,
				source: LocaleSource::Cookie,
				rejected: None,
			};
		}
	}

	let rejected = candidate.filter(|c| !c.is_empty()).map(str::to_string);
	let descriptor = catalog.default_locale();
	match &rejected {
		Some(value) => warn!(
			value = %value,
			fallback = %descriptor.code,
			"unsupported locale value, falling back to default"
		),
		None => debug!(fallback = %descriptor.code, "no locale value, using default"),
	}

	ResolvedLocale {
		descriptor,
		source: LocaleSource::Default,
		rejected,
	}
}

/// Resolve the locale carried by a raw `Cookie` header.
pub fn resolve_from_cookie_header<'a>(
	catalog: &'a LocaleCatalog,
	header: Option<&str>,
	cookie_name: &str,
) -> ResolvedLocale<'a> {
	let candidate = header.and_then(|h| cookie_value(h, cookie_name));
	resolve_locale(catalog, candidate)
}
