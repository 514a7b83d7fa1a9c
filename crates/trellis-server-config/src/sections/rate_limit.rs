// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale gate rate limiting.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use trellis_server_locale::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RateLimitConfigLayer {
	pub enabled: Option<bool>,
	pub max_requests: Option<u32>,
	pub window_secs: Option<u64>,
}

impl RateLimitConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.max_requests.is_some() {
			self.max_requests = other.max_requests;
		}
		if other.window_secs.is_some() {
			self.window_secs = other.window_secs;
		}
	}

	pub fn finalize(self) -> RateLimitConfig {
		let defaults = RateLimitConfig::default();
		RateLimitConfig {
			enabled: self.enabled.unwrap_or(defaults.enabled),
			max_requests: self.max_requests.unwrap_or(defaults.max_requests),
			window_secs: self.window_secs.unwrap_or(defaults.window_secs),
		}
	}
}

/// Applies in production only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateLimitConfig {
	pub enabled: bool,
	pub max_requests: u32,
	pub window_secs: u64,
}

impl RateLimitConfig {
	pub fn limiter_config(&self) -> trellis_server_locale::RateLimitConfig {
		trellis_server_locale::RateLimitConfig {
			max_requests: self.max_requests,
			window: Duration::from_secs(self.window_secs),
		}
	}
}

impl Default for RateLimitConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			max_requests: DEFAULT_MAX_REQUESTS,
			window_secs: DEFAULT_WINDOW.as_secs(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_match_limiter_defaults() {
		let config = RateLimitConfigLayer::default().finalize();
		assert!(config.enabled);
		assert_eq!(config.limiter_config(), trellis_server_locale::RateLimitConfig::default());
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let layer: RateLimitConfigLayer = toml::from_str("max_requests = 10").unwrap();
		assert_eq!(layer.max_requests, Some(10));
		assert!(layer.enabled.is_none());
		assert_eq!(layer.finalize().window_secs, 60);
	}
}
