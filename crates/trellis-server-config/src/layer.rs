// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The partial configuration produced by each source.

use serde::{Deserialize, Serialize};

use crate::sections::{
	Environment, LocaleConfigLayer, LoggingConfigLayer, RateLimitConfigLayer, SiteConfigLayer,
};

/// Every field is optional; later layers override earlier ones field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfigLayer {
	pub environment: Option<Environment>,
	pub site: Option<SiteConfigLayer>,
	pub locale: Option<LocaleConfigLayer>,
	pub rate_limit: Option<RateLimitConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	if let Some(next) = other {
		match base {
			Some(current) => merge(current, next),
			None => *base = Some(next),
		}
	}
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: ServerConfigLayer) {
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		merge_section(&mut self.site, other.site, SiteConfigLayer::merge);
		merge_section(&mut self.locale, other.locale, LocaleConfigLayer::merge);
		merge_section(&mut self.rate_limit, other.rate_limit, RateLimitConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_nested_sections() {
		let mut base: ServerConfigLayer = toml::from_str(
			r#"
environment = "test"

[locale]
default_locale = "fr"
cookie_name = "lang"
"#,
		)
		.unwrap();
		let overlay: ServerConfigLayer = toml::from_str(
			r#"
[locale]
default_locale = "ar"

[logging]
level = "debug"
"#,
		)
		.unwrap();

		base.merge(overlay);
		assert_eq!(base.environment, Some(Environment::Test));
		let locale = base.locale.unwrap();
		assert_eq!(locale.default_locale.as_deref(), Some("ar"));
		assert_eq!(locale.cookie_name.as_deref(), Some("lang"));
		assert_eq!(base.logging.unwrap().level.as_deref(), Some("debug"));
		assert!(base.site.is_none());
	}

	#[test]
	fn test_empty_overlay_is_noop() {
		let mut base = ServerConfigLayer {
			environment: Some(Environment::Production),
			..Default::default()
		};
		let before = base.clone();
		base.merge(ServerConfigLayer::default());
		assert_eq!(base, before);
	}
}
