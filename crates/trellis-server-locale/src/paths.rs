// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Which request paths the locale gate handles.

/// Prefixes never seeded with a locale.
pub const DEFAULT_BYPASS_PREFIXES: &[&str] = &["/api", "/assets", "/static", "/monitoring"];

/// Paths under this prefix get no-index and no-cache response headers.
pub const ADMIN_PREFIX: &str = "/admin";

/// Any path containing a dot is treated as a static file.
pub fn is_static_file(path: &str) -> bool {
	path.contains('.')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BypassRules {
	prefixes: Vec<String>,
}

impl BypassRules {
	pub fn new<I, S>(prefixes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			prefixes: prefixes.into_iter().map(Into::into).collect(),
		}
	}

	pub fn prefixes(&self) -> &[String] {
		&self.prefixes
	}

	pub fn is_bypassed(&self, path: &str) -> bool {
		self.prefixes.iter().any(|p| path.starts_with(p.as_str())) || is_static_file(path)
	}
}

impl Default for BypassRules {
	fn default() -> Self {
		Self::new(DEFAULT_BYPASS_PREFIXES.iter().copied())
	}
}
