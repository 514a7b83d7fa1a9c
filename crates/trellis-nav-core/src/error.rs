// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for navigation configuration.

use thiserror::Error;

/// Result type for navigation operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors raised while loading navigation configuration.
#[derive(Debug, Error)]
pub enum NavError {
	#[error("unknown icon: {0}")]
	UnknownIcon(String),

	#[error("duplicate navigation node id: {0}")]
	DuplicateId(String),

	#[error("invalid navigation JSON: {0}")]
	Parse(#[from] serde_json::Error),
}
