// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment environment.
///
/// Production turns on the rate limiter and the `Secure` cookie attribute;
/// development turns on locale debug headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	#[default]
	Development,
	Test,
	Production,
}

impl Environment {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Development => "development",
			Self::Test => "test",
			Self::Production => "production",
		}
	}

	pub fn is_production(&self) -> bool {
		matches!(self, Self::Production)
	}

	pub fn is_development(&self) -> bool {
		matches!(self, Self::Development)
	}
}

impl fmt::Display for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Environment {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"development" | "dev" => Ok(Self::Development),
			"test" => Ok(Self::Test),
			"production" | "prod" => Ok(Self::Production),
			_ => Err(format!("unknown environment '{s}'")),
		}
	}
}
