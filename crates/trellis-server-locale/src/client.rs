// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use http::header::COOKIE;
use http::HeaderMap;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const X_REAL_IP: &str = "x-real-ip";

/// Key used when no client address header is present.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Identify the client for rate limiting: first `X-Forwarded-For` entry,
/// then `X-Real-IP`, then [`UNKNOWN_CLIENT`].
pub fn client_key(headers: &HeaderMap) -> String {
	let forwarded = headers
		.get(X_FORWARDED_FOR)
		.and_then(|v| v.to_str().ok())
		.and_then(|v| v.split(',').next())
		.map(str::trim)
		.filter(|v| !v.is_empty());

	let real_ip = || {
		headers
			.get(X_REAL_IP)
			.and_then(|v| v.to_str().ok())
			.map(str::trim)
			.filter(|v| !v.is_empty())
	};

	forwarded
		.or_else(real_ip)
		.unwrap_or(UNKNOWN_CLIENT)
		.to_string()
}

/// Value of the named cookie across all `Cookie` headers of a request.
pub fn request_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|v| v.to_str().ok())
		.find_map(|header| trellis_common_i18n::cookie_value(header, name))
		.map(str::to_string)
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;

	#[test]
	fn test_forwarded_for_first_entry() {
		let mut headers = HeaderMap::new();
		headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
		headers.insert(X_REAL_IP, HeaderValue::from_static("10.0.0.2"));
		assert_eq!(client_key(&headers), "203.0.113.7");
	}

	#[test]
	fn test_real_ip_fallback() {
		let mut headers = HeaderMap::new();
		headers.insert(X_REAL_IP, HeaderValue::from_static("10.0.0.2"));
		assert_eq!(client_key(&headers), "10.0.0.2");

		headers.insert(X_FORWARDED_FOR, HeaderValue::from_static(" "));
		assert_eq!(client_key(&headers), "10.0.0.2");
	}

	#[test]
	fn test_unknown_client() {
		assert_eq!(client_key(&HeaderMap::new()), UNKNOWN_CLIENT);
	}

	#[test]
	fn test_request_cookie_across_headers() {
		let mut headers = HeaderMap::new();
		headers.append(COOKIE, HeaderValue::from_static("session=abc"));
		headers.append(COOKIE, HeaderValue::from_static("theme=dark; trellis_locale=ar"));
		assert_eq!(request_cookie(&headers, "trellis_locale").as_deref(), Some("ar"));
		assert!(request_cookie(&headers, "missing").is_none());
	}
}
