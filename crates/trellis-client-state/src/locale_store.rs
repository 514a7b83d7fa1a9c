// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The active locale and its text direction.
//!
//! `locale` and `direction` are only ever written together under one write
//! lock, and the change notification is sent before that lock is released, so
//! subscribers observe changes in the order they were applied. The cookie
//! write in [`LocaleStore::set_locale`] happens with no lock held.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use trellis_common_i18n::{
	resolve_locale, CookieOptions, Direction, LocaleCatalog, LocaleCookie, LocaleDescriptor,
};

use crate::cookie_jar::LocaleCookieStore;
use crate::error::{LocaleError, Result};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Published after every applied locale change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChange {
	pub locale: String,
	pub direction: Direction,
	pub previous_locale: String,
}

/// Point-in-time copy of the store's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSnapshot {
	pub locale: String,
	pub direction: Direction,
	pub is_changing: bool,
	pub last_error: Option<LocaleError>,
}

impl LocaleSnapshot {
	pub fn is_rtl(&self) -> bool {
		self.direction.is_rtl()
	}
}

#[derive(Debug)]
struct LocaleState {
	locale: String,
	direction: Direction,
	/// Number of `set_locale` calls waiting on the cookie write.
	pending: usize,
	last_error: Option<LocaleError>,
}

impl LocaleState {
	fn snapshot(&self) -> LocaleSnapshot {
		LocaleSnapshot {
			locale: self.locale.clone(),
			direction: self.direction,
			is_changing: self.pending > 0,
			last_error: self.last_error.clone(),
		}
	}

	fn apply(&mut self, descriptor: &LocaleDescriptor) -> LocaleChange {
		let previous_locale = std::mem::replace(&mut self.locale, descriptor.code.clone());
		self.direction = descriptor.direction;
		LocaleChange {
			locale: descriptor.code.clone(),
			direction: descriptor.direction,
			previous_locale,
		}
	}
}

/// Explicitly constructed locale state container.
///
/// Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct LocaleStore {
	inner: Arc<LocaleStoreInner>,
}

struct LocaleStoreInner {
	catalog: Arc<LocaleCatalog>,
	cookies: Arc<dyn LocaleCookieStore>,
	cookie_options: CookieOptions,
	state: RwLock<LocaleState>,
	sender: broadcast::Sender<LocaleChange>,
}

impl LocaleStore {
	/// Create a store starting at `initial`, or the catalog default when
	/// `initial` is absent or not in the catalog.
	pub fn new(
		catalog: Arc<LocaleCatalog>,
		cookies: Arc<dyn LocaleCookieStore>,
		initial: Option<&str>,
	) -> Self {
		Self::with_options(catalog, cookies, CookieOptions::default(), initial)
	}

	pub fn with_options(
		catalog: Arc<LocaleCatalog>,
		cookies: Arc<dyn LocaleCookieStore>,
		cookie_options: CookieOptions,
		initial: Option<&str>,
	) -> Self {
		let resolved = resolve_locale(&catalog, initial);
		let state = LocaleState {
			locale: resolved.code().to_string(),
			direction: resolved.direction(),
			pending: 0,
			last_error: None,
		};
		debug!(locale = %state.locale, direction = %state.direction, "locale store created");

		let (sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
		Self {
			inner: Arc::new(LocaleStoreInner {
				catalog,
				cookies,
				cookie_options,
				state: RwLock::new(state),
				sender,
			}),
		}
	}

	/// Create a store seeded from the locale cookie currently visible in
	/// `cookies`.
	pub fn from_cookie(
		catalog: Arc<LocaleCatalog>,
		cookies: Arc<dyn LocaleCookieStore>,
		cookie_options: CookieOptions,
	) -> Self {
		let initial = cookies.read(&cookie_options.name);
		Self::with_options(catalog, cookies, cookie_options, initial.as_deref())
	}

	/// Switch to `code`, persisting it to the locale cookie first.
	///
	/// On any failure the locale and direction keep their previous values and
	/// the error is also kept in `last_error`. Concurrent calls are not
	/// serialized; the last write to complete wins.
	pub async fn set_locale(&self, code: &str) -> Result<()> {
		let inner = &self.inner;

		let Some(descriptor) = inner.catalog.get(code).cloned() else {
			let err = LocaleError::UnknownLocale(code.to_string());
			warn!(locale = code, "rejected unknown locale");
			inner.state.write().last_error = Some(err.clone());
			return Err(err);
		};

		{
			let mut state = inner.state.write();
			if state.locale == descriptor.code {
				debug!(locale = code, "locale unchanged");
				return Ok(());
			}
			state.pending += 1;
			state.last_error = None;
		}

		let cookie = LocaleCookie::new(inner.cookie_options.clone(), descriptor.code.as_str());
		let written = inner.cookies.write(&cookie).await;

		let mut state = inner.state.write();
		state.pending = state.pending.saturating_sub(1);

		match written {
			Ok(()) => {
				let change = state.apply(&descriptor);
				info!(
					locale = %change.locale,
					previous = %change.previous_locale,
					direction = %change.direction,
					"locale changed"
				);
				let _ = inner.sender.send(change);
				Ok(())
			}
			Err(e) => {
				let err = LocaleError::Persistence(e.to_string());
				warn!(locale = code, error = %e, "failed to persist locale");
				state.last_error = Some(err.clone());
				Err(err)
			}
		}
	}

	/// Adopt the locale cookie if it names a different supported locale.
	///
	/// Does not write the cookie and does not enter the changing state.
	/// Returns whether the locale changed.
	pub fn sync_with_cookie(&self) -> bool {
		let inner = &self.inner;

		let Some(value) = inner.cookies.read(&inner.cookie_options.name) else {
			return false;
		};
		let Some(descriptor) = inner.catalog.get(&value) else {
			debug!(cookie = %value, "ignoring unsupported locale cookie");
			return false;
		};

		let mut state = inner.state.write();
		if state.locale == descriptor.code {
			return false;
		}

		let change = state.apply(descriptor);
		info!(locale = %change.locale, previous = %change.previous_locale, "locale synced from cookie");
		let _ = inner.sender.send(change);
		true
	}

	pub fn clear_error(&self) {
		self.inner.state.write().last_error = None;
	}

	pub fn snapshot(&self) -> LocaleSnapshot {
		self.inner.state.read().snapshot()
	}

	pub fn locale(&self) -> String {
		self.inner.state.read().locale.clone()
	}

	pub fn direction(&self) -> Direction {
		self.inner.state.read().direction
	}

	pub fn is_rtl(&self) -> bool {
		self.direction().is_rtl()
	}

	pub fn is_changing(&self) -> bool {
		self.inner.state.read().pending > 0
	}

	pub fn last_error(&self) -> Option<LocaleError> {
		self.inner.state.read().last_error.clone()
	}

	/// Descriptor of the active locale.
	pub fn current_descriptor(&self) -> LocaleDescriptor {
		let locale = self.locale();
		match self.inner.catalog.get(&locale) {
			Some(descriptor) => descriptor.clone(),
			None => self.inner.catalog.default_locale().clone(),
		}
	}

	pub fn catalog(&self) -> &LocaleCatalog {
		&self.inner.catalog
	}

	/// Receive changes applied after this call. No replay.
	pub fn subscribe(&self) -> broadcast::Receiver<LocaleChange> {
		self.inner.sender.subscribe()
	}
}

impl std::fmt::Debug for LocaleStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LocaleStore")
			.field("state", &*self.inner.state.read())
			.field("cookie", &self.inner.cookie_options.name)
			.finish()
	}
}
