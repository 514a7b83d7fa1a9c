// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale cookie and gate bypass settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use trellis_common_i18n::{CookieOptions, DEFAULT_LOCALE, LOCALE_COOKIE_NAME};
use trellis_server_locale::{BypassRules, DEFAULT_BYPASS_PREFIXES};

const SECS_PER_DAY: u64 = 60 * 60 * 24;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfigLayer {
	pub default_locale: Option<String>,
	pub cookie_name: Option<String>,
	pub cookie_max_age_days: Option<u64>,
	pub bypass_prefixes: Option<Vec<String>>,
}

impl LocaleConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.cookie_name.is_some() {
			self.cookie_name = other.cookie_name;
		}
		if other.cookie_max_age_days.is_some() {
			self.cookie_max_age_days = other.cookie_max_age_days;
		}
		if other.bypass_prefixes.is_some() {
			self.bypass_prefixes = other.bypass_prefixes;
		}
	}

	pub fn finalize(self) -> LocaleConfig {
		let defaults = LocaleConfig::default();
		LocaleConfig {
			default_locale: self.default_locale.unwrap_or(defaults.default_locale),
			cookie_name: self.cookie_name.unwrap_or(defaults.cookie_name),
			cookie_max_age_days: self.cookie_max_age_days.unwrap_or(defaults.cookie_max_age_days),
			bypass_prefixes: self.bypass_prefixes.unwrap_or(defaults.bypass_prefixes),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
	pub default_locale: String,
	pub cookie_name: String,
	pub cookie_max_age_days: u64,
	pub bypass_prefixes: Vec<String>,
}

impl LocaleConfig {
	pub fn cookie_options(&self, production: bool) -> CookieOptions {
		CookieOptions::for_environment(production)
			.with_name(self.cookie_name.clone())
			.with_max_age(Duration::from_secs(self.cookie_max_age_days * SECS_PER_DAY))
	}

	pub fn bypass_rules(&self) -> BypassRules {
		BypassRules::new(self.bypass_prefixes.iter().cloned())
	}
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE.to_string(),
			cookie_name: LOCALE_COOKIE_NAME.to_string(),
			cookie_max_age_days: 365,
			bypass_prefixes: DEFAULT_BYPASS_PREFIXES.iter().map(|p| p.to_string()).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_cookie_options_match_builtin() {
		let config = LocaleConfigLayer::default().finalize();
		assert_eq!(config.cookie_options(false), CookieOptions::default());
		assert!(config.cookie_options(true).secure);
	}

	#[test]
	fn test_custom_cookie() {
		let config = LocaleConfigLayer {
			cookie_name: Some("lang".to_string()),
			cookie_max_age_days: Some(30),
			..Default::default()
		}
		.finalize();
		let options = config.cookie_options(false);
		assert_eq!(options.name, "lang");
		assert_eq!(options.max_age, Duration::from_secs(30 * SECS_PER_DAY));
	}

	#[test]
	fn test_bypass_rules() {
		let config = LocaleConfig::default();
		assert_eq!(config.bypass_rules(), BypassRules::default());
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = LocaleConfigLayer {
			default_locale: Some("fr".to_string()),
			cookie_name: Some("lang".to_string()),
			..Default::default()
		};
		base.merge(LocaleConfigLayer {
			default_locale: Some("ar".to_string()),
			..Default::default()
		});
		assert_eq!(base.default_locale.as_deref(), Some("ar"));
		assert_eq!(base.cookie_name.as_deref(), Some("lang"));
	}
}
