// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised while assembling a [`crate::LocaleCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	#[error("locale catalog is empty")]
	Empty,

	#[error("duplicate locale code: {0}")]
	DuplicateCode(String),

	#[error("default locale '{0}' is not an enabled catalog entry")]
	UnknownDefault(String),
}
