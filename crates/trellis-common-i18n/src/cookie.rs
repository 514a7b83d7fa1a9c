// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The persisted locale cookie.
//!
//! The cookie is read on the server before any page renders and by the client
//! store at start-up, so it is never `HttpOnly`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default name of the locale cookie.
pub const LOCALE_COOKIE_NAME: &str = "trellis_locale";

/// One year.
pub const LOCALE_COOKIE_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
	Strict,
	#[default]
	Lax,
	None,
}

impl fmt::Display for SameSite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SameSite::Strict => "Strict",
			SameSite::Lax => "Lax",
			SameSite::None => "None",
		})
	}
}

/// Attributes applied whenever the locale cookie is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
	pub name: String,
	pub path: String,
	pub max_age: Duration,
	pub same_site: SameSite,
	pub secure: bool,
	pub http_only: bool,
}

impl Default for CookieOptions {
	fn default() -> Self {
		Self {
			name: LOCALE_COOKIE_NAME.to_string(),
			path: "/".to_string(),
			max_age: LOCALE_COOKIE_MAX_AGE,
			same_site: SameSite::Lax,
			secure: false,
			http_only: false,
		}
	}
}

impl CookieOptions {
	/// Defaults with `Secure` switched on for production deployments.
	pub fn for_environment(production: bool) -> Self {
		Self {
			secure: production,
			..Self::default()
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_max_age(mut self, max_age: Duration) -> Self {
		self.max_age = max_age;
		self
	}
}

/// A locale cookie ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCookie {
	options: CookieOptions,
	value: String,
}

impl LocaleCookie {
	pub fn new(options: CookieOptions, value: impl Into<String>) -> Self {
		Self {
			options,
			value: value.into(),
		}
	}

	pub fn name(&self) -> &str {
		&self.options.name
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn options(&self) -> &CookieOptions {
		&self.options
	}

	/// Render as a `Set-Cookie` header value.
	pub fn to_header_value(&self) -> String {
		let mut out = format!(
			"{}={}; Path={}; Max-Age={}; SameSite={}",
			self.options.name,
			self.value,
			self.options.path,
			self.options.max_age.as_secs(),
			self.options.same_site,
		);
		if self.options.secure {
			out.push_str("; Secure");
		}
		if self.options.http_only {
			out.push_str("; HttpOnly");
		}
		out
	}
}

impl fmt::Display for LocaleCookie {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_header_value())
	}
}

/// Find a cookie's value in a raw `Cookie` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
	header.split(';').find_map(|pair| {
		let (key, value) = pair.trim().split_once('=')?;
		if key.trim() == name {
			Some(value.trim())
		} else {
			None
		}
	})
}
