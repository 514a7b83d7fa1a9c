// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocaleError>;

/// Failures of a locale change. Kept in the store's `last_error` as well as
/// returned, so the type is cloneable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
	#[error("unknown locale: {0}")]
	UnknownLocale(String),

	#[error("failed to persist locale cookie: {0}")]
	Persistence(String),
}

impl LocaleError {
	pub fn is_persistence(&self) -> bool {
		matches!(self, Self::Persistence(_))
	}
}
