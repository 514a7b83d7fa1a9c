// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Debug, Error)]
pub enum GateError {
	#[error("invalid response header value: {0}")]
	InvalidHeader(#[from] http::header::InvalidHeaderValue),

	#[error("failed to build response: {0}")]
	Response(#[from] http::Error),
}
