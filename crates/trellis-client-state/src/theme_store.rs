// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Light/dark theme selection.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// The theme the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	Light,
	Dark,
	#[default]
	System,
}

/// The theme actually displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
			Self::System => "system",
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			"system" => Ok(Self::System),
			_ => Err(format!("invalid theme mode: {s}")),
		}
	}
}

impl ResolvedTheme {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

impl fmt::Display for ResolvedTheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeChange {
	pub mode: ThemeMode,
	pub resolved: ResolvedTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ThemeState {
	mode: ThemeMode,
	system: ResolvedTheme,
}

impl ThemeState {
	fn resolved(&self) -> ResolvedTheme {
		match self.mode {
			ThemeMode::Light => ResolvedTheme::Light,
			ThemeMode::Dark => ResolvedTheme::Dark,
			ThemeMode::System => self.system,
		}
	}

	fn snapshot(&self) -> ThemeChange {
		ThemeChange {
			mode: self.mode,
			resolved: self.resolved(),
		}
	}
}

#[derive(Clone)]
pub struct ThemeStore {
	inner: Arc<ThemeStoreInner>,
}

struct ThemeStoreInner {
	state: RwLock<ThemeState>,
	sender: broadcast::Sender<ThemeChange>,
}

impl ThemeStore {
	/// `system` is the platform's current color-scheme preference.
	pub fn new(mode: ThemeMode, system: ResolvedTheme) -> Self {
		let (sender, _) = broadcast::channel(16);
		Self {
			inner: Arc::new(ThemeStoreInner {
				state: RwLock::new(ThemeState { mode, system }),
				sender,
			}),
		}
	}

	pub fn set_theme(&self, mode: ThemeMode) {
		let mut state = self.inner.state.write();
		state.mode = mode;
		let change = state.snapshot();
		debug!(mode = %change.mode, resolved = %change.resolved, "theme set");
		let _ = self.inner.sender.send(change);
	}

	/// Light becomes dark; dark and system become light.
	pub fn toggle_theme(&self) {
		let next = match self.inner.state.read().mode {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark | ThemeMode::System => ThemeMode::Light,
		};
		self.set_theme(next);
	}

	/// Record a new platform preference. Publishes only when the displayed
	/// theme changes.
	pub fn set_system_preference(&self, system: ResolvedTheme) {
		let mut state = self.inner.state.write();
		let before = state.resolved();
		state.system = system;
		if state.resolved() != before {
			let _ = self.inner.sender.send(state.snapshot());
		}
	}

	pub fn snapshot(&self) -> ThemeChange {
		self.inner.state.read().snapshot()
	}

	pub fn subscribe(&self) -> broadcast::Receiver<ThemeChange> {
		self.inner.sender.subscribe()
	}
}

impl Default for ThemeStore {
	fn default() -> Self {
		Self::new(ThemeMode::System, ResolvedTheme::Light)
	}
}

impl fmt::Debug for ThemeStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ThemeStore")
			.field("state", &*self.inner.state.read())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_system_mode_follows_preference() {
		let store = ThemeStore::new(ThemeMode::System, ResolvedTheme::Dark);
		assert_eq!(store.snapshot().resolved, ResolvedTheme::Dark);

		let mut rx = store.subscribe();
		store.set_system_preference(ResolvedTheme::Light);
		assert_eq!(rx.try_recv().unwrap().resolved, ResolvedTheme::Light);
	}

	#[test]
	fn test_explicit_mode_ignores_preference() {
		let store = ThemeStore::new(ThemeMode::Dark, ResolvedTheme::Light);
		let mut rx = store.subscribe();
		store.set_system_preference(ResolvedTheme::Dark);
		store.set_system_preference(ResolvedTheme::Light);
		assert!(rx.try_recv().is_err());
		assert_eq!(store.snapshot().resolved, ResolvedTheme::Dark);
	}

	#[test]
	fn test_toggle() {
		let store = ThemeStore::default();
		store.toggle_theme();
		assert_eq!(store.snapshot().mode, ThemeMode::Light);
		store.toggle_theme();
		assert_eq!(store.snapshot().mode, ThemeMode::Dark);
		store.toggle_theme();
		assert_eq!(store.snapshot().mode, ThemeMode::Light);
	}

	#[test]
	fn test_set_theme_publishes() {
		let store = ThemeStore::default();
		let mut rx = store.subscribe();
		store.set_theme(ThemeMode::Dark);
		assert_eq!(
			rx.try_recv().unwrap(),
			ThemeChange {
				mode: ThemeMode::Dark,
				resolved: ResolvedTheme::Dark
			}
		);
	}

	#[test]
	fn test_parse_mode() {
		assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
		assert!("sepia".parse::<ThemeMode>().is_err());
	}
}
