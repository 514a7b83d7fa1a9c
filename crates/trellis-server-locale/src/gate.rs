// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The per-request locale gate.
//!
//! Every request that is not bypassed leaves the gate with a locale: the
//! cookie's value when it is supported, the catalog default otherwise. In the
//! latter case the response carries a `Set-Cookie` so the next request
//! arrives seeded.

use std::sync::Arc;
use std::time::Duration;

use http::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA, RETRY_AFTER, SET_COOKIE};
use http::{HeaderMap, HeaderValue, Request, Response, StatusCode};
use tracing::{debug, warn};
use trellis_common_i18n::{resolve_locale, CookieOptions, LocaleCatalog, LocaleCookie, LocaleSource};

use crate::client::{client_key, request_cookie};
use crate::error::Result;
use crate::paths::{BypassRules, ADMIN_PREFIX};
use crate::rate_limit::{RateLimitConfig, RateLimiter};

pub const X_LOCALE_DETERMINED: &str = "x-locale-determined";
pub const X_LOCALE_SOURCE: &str = "x-locale-source";
pub const X_ROBOTS_TAG: &str = "x-robots-tag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
	pub bypass: BypassRules,
	/// `None` disables rate limiting.
	pub rate_limit: Option<RateLimitConfig>,
	pub cookie: CookieOptions,
	/// Emit `X-Locale-Determined` and `X-Locale-Source`.
	pub debug_headers: bool,
}

impl GateConfig {
	/// Development: no rate limit, debug headers, insecure cookie.
	pub fn development() -> Self {
		Self {
			bypass: BypassRules::default(),
			rate_limit: None,
			cookie: CookieOptions::for_environment(false),
			debug_headers: true,
		}
	}

	/// Production: rate limited, secure cookie, no debug headers.
	pub fn production() -> Self {
		Self {
			bypass: BypassRules::default(),
			rate_limit: Some(RateLimitConfig::default()),
			cookie: CookieOptions::for_environment(true),
			debug_headers: false,
		}
	}
}

/// The locale chosen for a request that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededLocale {
	pub locale: String,
	pub source: LocaleSource,
	/// Headers to add to the eventual response.
	pub headers: HeaderMap,
}

impl SeededLocale {
	pub fn sets_cookie(&self) -> bool {
		self.headers.contains_key(SET_COOKIE)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
	/// The gate does not apply to this path.
	Bypass,
	/// Reject with 429.
	RateLimited { retry_after: Duration },
	Proceed(SeededLocale),
}

impl GateDecision {
	/// The 429 response for a rate-limited decision.
	pub fn rejection(&self) -> Result<Option<Response<String>>> {
		let GateDecision::RateLimited { retry_after } = self else {
			return Ok(None);
		};
		let response = Response::builder()
			.status(StatusCode::TOO_MANY_REQUESTS)
			.header(RETRY_AFTER, retry_after.as_secs().to_string())
			.header(CONTENT_TYPE, "text/plain")
			.body("Too Many Requests".to_string())?;
		Ok(Some(response))
	}
}

#[derive(Debug)]
pub struct LocaleGate {
	catalog: Arc<LocaleCatalog>,
	config: GateConfig,
	limiter: Option<RateLimiter>,
}

impl LocaleGate {
	pub fn new(catalog: Arc<LocaleCatalog>, config: GateConfig) -> Self {
		let limiter = config.rate_limit.map(RateLimiter::new);
		Self {
			catalog,
			config,
			limiter,
		}
	}

	pub fn config(&self) -> &GateConfig {
		&self.config
	}

	pub fn evaluate_request<B>(&self, request: &Request<B>) -> Result<GateDecision> {
		self.evaluate(request.uri().path(), request.headers())
	}

	pub fn evaluate(&self, path: &str, headers: &HeaderMap) -> Result<GateDecision> {
		if self.config.bypass.is_bypassed(path) {
			return Ok(GateDecision::Bypass);
		}

		if let Some(limiter) = &self.limiter {
			let client = client_key(headers);
			if !limiter.check(&client) {
				let retry_after = limiter.config().window;
				warn!(path, client = %client, "rate limit exceeded");
				return Ok(GateDecision::RateLimited { retry_after });
			}
		}

		let cookie = request_cookie(headers, &self.config.cookie.name);
		let resolved = resolve_locale(&self.catalog, cookie.as_deref());
		let locale = resolved.code().to_string();
		let source = resolved.source;

		let mut response_headers = HeaderMap::new();

		if source == LocaleSource::Default {
			let seeded = LocaleCookie::new(self.config.cookie.clone(), locale.as_str());
			response_headers.insert(SET_COOKIE, HeaderValue::from_str(&seeded.to_header_value())?);
		}

		if self.config.debug_headers {
			response_headers.insert(X_LOCALE_DETERMINED, HeaderValue::from_str(&locale)?);
			response_headers.insert(X_LOCALE_SOURCE, HeaderValue::from_static(source.as_str()));
		}

		if path.starts_with(ADMIN_PREFIX) {
			response_headers.insert(
				X_ROBOTS_TAG,
				HeaderValue::from_static("noindex, nofollow, noarchive, nosnippet"),
			);
			response_headers.insert(
				CACHE_CONTROL,
				HeaderValue::from_static("no-cache, no-store, must-revalidate"),
			);
			response_headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
			response_headers.insert(EXPIRES, HeaderValue::from_static("0"));
		}

		debug!(path, locale = %locale, source = source.as_str(), "locale gate passed");

		Ok(GateDecision::Proceed(SeededLocale {
			locale,
			source,
			headers: response_headers,
		}))
	}
}
