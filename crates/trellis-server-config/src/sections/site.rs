// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site layout: root paths and the navigation source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use trellis_nav_core::{ResolverConfig, DASHBOARD_PATH, HOME_PATH};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfigLayer {
	pub home_path: Option<String>,
	pub dashboard_path: Option<String>,
	pub navigation_file: Option<PathBuf>,
	pub skip_segments: Option<Vec<String>>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.home_path.is_some() {
			self.home_path = other.home_path;
		}
		if other.dashboard_path.is_some() {
			self.dashboard_path = other.dashboard_path;
		}
		if other.navigation_file.is_some() {
			self.navigation_file = other.navigation_file;
		}
		if other.skip_segments.is_some() {
			self.skip_segments = other.skip_segments;
		}
	}

	pub fn finalize(self) -> SiteConfig {
		let defaults = SiteConfig::default();
		SiteConfig {
			home_path: self.home_path.unwrap_or(defaults.home_path),
			dashboard_path: self.dashboard_path.unwrap_or(defaults.dashboard_path),
			navigation_file: self.navigation_file,
			skip_segments: self.skip_segments.unwrap_or(defaults.skip_segments),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
	pub home_path: String,
	pub dashboard_path: String,
	/// JSON navigation tree; the built-in admin sidebar when unset.
	pub navigation_file: Option<PathBuf>,
	pub skip_segments: Vec<String>,
}

impl SiteConfig {
	pub fn resolver_config(&self) -> ResolverConfig {
		ResolverConfig {
			home_path: self.home_path.clone(),
			dashboard_path: self.dashboard_path.clone(),
			skip_segments: self.skip_segments.clone(),
		}
	}
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			home_path: HOME_PATH.to_string(),
			dashboard_path: DASHBOARD_PATH.to_string(),
			navigation_file: None,
			skip_segments: vec!["admin".to_string()],
		}
	}
}
