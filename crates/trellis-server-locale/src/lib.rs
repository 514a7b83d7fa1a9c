// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-side locale seeding for Trellis.
//!
//! [`LocaleGate`] runs in front of page handlers. It is framework-agnostic:
//! it reads an [`http::HeaderMap`] and returns a [`GateDecision`] whose
//! headers the caller copies onto its response.

pub mod client;
pub mod error;
pub mod gate;
pub mod paths;
pub mod rate_limit;

pub use client::{client_key, request_cookie, UNKNOWN_CLIENT};
pub use error::{GateError, Result};
pub use gate::{GateConfig, GateDecision, LocaleGate, SeededLocale, X_LOCALE_DETERMINED, X_LOCALE_SOURCE, X_ROBOTS_TAG};
pub use paths::{is_static_file, BypassRules, ADMIN_PREFIX, DEFAULT_BYPASS_PREFIXES};
pub use rate_limit::{RateLimitConfig, RateLimiter, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW};
