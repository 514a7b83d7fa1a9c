// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The cookie persistence seam used by [`crate::LocaleStore`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;
use trellis_common_i18n::LocaleCookie;

/// A cookie write that did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CookieWriteError(pub String);

/// Reads and writes cookies visible to the client.
///
/// `write` is the only suspension point of a locale change.
#[async_trait]
pub trait LocaleCookieStore: Send + Sync {
	fn read(&self, name: &str) -> Option<String>;

	async fn write(&self, cookie: &LocaleCookie) -> Result<(), CookieWriteError>;
}

/// Process-local cookie jar.
#[derive(Debug, Default)]
pub struct InMemoryCookieJar {
	cookies: RwLock<HashMap<String, String>>,
	last_header: RwLock<Option<String>>,
	writes: AtomicUsize,
	fail_writes: AtomicBool,
}

impl InMemoryCookieJar {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_cookie(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	/// Change a cookie without going through [`LocaleCookieStore::write`],
	/// as a server response or another tab would.
	pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
		self.cookies.write().insert(name.into(), value.into());
	}

	pub fn remove(&self, name: &str) {
		self.cookies.write().remove(name);
	}

	/// Make subsequent writes fail until reset.
	pub fn fail_writes(&self, fail: bool) {
		self.fail_writes.store(fail, Ordering::SeqCst);
	}

	/// Number of successful writes.
	pub fn write_count(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	/// The `Set-Cookie` value of the last successful write.
	pub fn last_set_cookie(&self) -> Option<String> {
		self.last_header.read().clone()
	}
}

#[async_trait]
impl LocaleCookieStore for InMemoryCookieJar {
	fn read(&self, name: &str) -> Option<String> {
		self.cookies.read().get(name).cloned()
	}

	async fn write(&self, cookie: &LocaleCookie) -> Result<(), CookieWriteError> {
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(CookieWriteError("cookie storage is unavailable".to_string()));
		}

		self.cookies
			.write()
			.insert(cookie.name().to_string(), cookie.value().to_string());
		*self.last_header.write() = Some(cookie.to_header_value());
		self.writes.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}
