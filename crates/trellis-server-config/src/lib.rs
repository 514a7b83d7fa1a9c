// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for Trellis.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`TRELLIS_*`)
//!
//! # Usage
//!
//! ```no_run
//! use trellis_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("default locale: {}", config.locale.default_locale);
//! # Ok::<(), trellis_server_config::ConfigError>(())
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, ENV_PREFIX, SYSTEM_CONFIG_PATH,
};

use serde::Serialize;
use tracing::{debug, info};
use trellis_common_i18n::LocaleCatalog;
use trellis_server_locale::GateConfig;

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ServerConfig {
	pub environment: Environment,
	pub site: SiteConfig,
	pub locale: LocaleConfig,
	pub rate_limit: RateLimitConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Locale gate settings for this environment. The rate limiter and the
	/// `Secure` cookie attribute apply in production only; debug headers in
	/// development only.
	pub fn gate_config(&self) -> GateConfig {
		let production = self.environment.is_production();
		GateConfig {
			bypass: self.locale.bypass_rules(),
			rate_limit: (production && self.rate_limit.enabled).then(|| self.rate_limit.limiter_config()),
			cookie: self.locale.cookie_options(production),
			debug_headers: self.environment.is_development(),
		}
	}

	/// The built-in catalog with the configured default locale.
	pub fn locale_catalog(&self) -> Result<LocaleCatalog, ConfigError> {
		LocaleCatalog::builtin()
			.with_default(&self.locale.default_locale)
			.map_err(|e| ConfigError::validation(e.to_string()))
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`TRELLIS_*`)
/// 2. Config file (`/etc/trellis/config.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource::default()),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::default()),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let config = ServerConfig {
		environment: layer.environment.unwrap_or_default(),
		site: layer.site.unwrap_or_default().finalize(),
		locale: layer.locale.unwrap_or_default().finalize(),
		rate_limit: layer.rate_limit.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		environment = %config.environment,
		default_locale = %config.locale.default_locale,
		navigation_file = ?config.site.navigation_file,
		rate_limit_enabled = config.rate_limit.enabled,
		"Configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
	for (key, path) in [
		("site.home_path", &config.site.home_path),
		("site.dashboard_path", &config.site.dashboard_path),
	] {
		if !path.starts_with('/') {
			return Err(ConfigError::validation(format!("{key} must start with '/', got '{path}'")));
		}
	}

	if let Some(prefix) = config.locale.bypass_prefixes.iter().find(|p| !p.starts_with('/')) {
		return Err(ConfigError::validation(format!(
			"locale.bypass_prefixes entries must start with '/', got '{prefix}'"
		)));
	}

	config.locale_catalog()?;

	if config.locale.cookie_name.is_empty() {
		return Err(ConfigError::validation("locale.cookie_name must not be empty"));
	}

	if config.rate_limit.window_secs == 0 {
		return Err(ConfigError::validation("rate_limit.window_secs must be greater than zero"));
	}
	if config.rate_limit.max_requests == 0 {
		return Err(ConfigError::validation("rate_limit.max_requests must be greater than zero"));
	}

	Ok(())
}
