// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	Environment, LocaleConfigLayer, LogFormat, LoggingConfigLayer, RateLimitConfigLayer,
	SiteConfigLayer,
};

/// Default location of the system config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/trellis/config.toml";

/// Default environment variable prefix.
pub const ENV_PREFIX: &str = "TRELLIS";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `<PREFIX>_<SECTION>_<FIELD>`, with `<PREFIX>_ENV` selecting
/// the deployment environment.
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self { prefix: prefix.into() }
	}

	fn key(&self, suffix: &str) -> String {
		format!("{}_{suffix}", self.prefix)
	}

	fn var(&self, suffix: &str) -> Option<String> {
		env_var(&self.key(suffix))
	}

	fn parsed<T>(&self, suffix: &str) -> Result<Option<T>, ConfigError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let key = self.key(suffix);
		match env_var(&key) {
			Some(v) => v.parse().map(Some).map_err(|e: T::Err| ConfigError::InvalidValue {
				key,
				message: format!("invalid value '{v}': {e}"),
			}),
			None => Ok(None),
		}
	}

	fn load_site(&self) -> SiteConfigLayer {
		SiteConfigLayer {
			home_path: self.var("SITE_HOME_PATH"),
			dashboard_path: self.var("SITE_DASHBOARD_PATH"),
			navigation_file: self.var("SITE_NAVIGATION_FILE").map(PathBuf::from),
			skip_segments: self.var("SITE_SKIP_SEGMENTS").map(|v| split_list(&v)),
		}
	}

	fn load_locale(&self) -> Result<LocaleConfigLayer, ConfigError> {
		Ok(LocaleConfigLayer {
			default_locale: self.var("DEFAULT_LOCALE"),
			cookie_name: self.var("LOCALE_COOKIE_NAME"),
			cookie_max_age_days: self.parsed("LOCALE_COOKIE_MAX_AGE_DAYS")?,
			bypass_prefixes: self.var("LOCALE_BYPASS_PREFIXES").map(|v| split_list(&v)),
		})
	}

	fn load_rate_limit(&self) -> Result<RateLimitConfigLayer, ConfigError> {
		Ok(RateLimitConfigLayer {
			enabled: env_bool(&self.key("RATE_LIMIT_ENABLED")),
			max_requests: self.parsed("RATE_LIMIT_MAX_REQUESTS")?,
			window_secs: self.parsed("RATE_LIMIT_WINDOW_SECS")?,
		})
	}

	fn load_logging(&self) -> Result<LoggingConfigLayer, ConfigError> {
		Ok(LoggingConfigLayer {
			level: self.var("LOG_LEVEL"),
			format: self.parsed::<LogFormat>("LOG_FORMAT")?,
		})
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::with_prefix(ENV_PREFIX)
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!(prefix = %self.prefix, "loading environment variables");
		Ok(ServerConfigLayer {
			environment: self.parsed::<Environment>("ENV")?,
			site: Some(self.load_site()),
			locale: Some(self.load_locale()?),
			rate_limit: Some(self.load_rate_limit()?),
			logging: Some(self.load_logging()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn split_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(|s| s.trim().to_string())
		.filter(|s| !s.is_empty())
		.collect()
}
