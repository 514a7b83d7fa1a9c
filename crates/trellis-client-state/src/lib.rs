// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-side state containers for Trellis.
//!
//! Stores are constructed explicitly and shared by cloning. Dependents read
//! snapshots and subscribe to change notifications over a broadcast channel;
//! nothing here touches a DOM.

pub mod cookie_jar;
pub mod document;
pub mod error;
pub mod locale_store;
pub mod theme_store;

pub use cookie_jar::{CookieWriteError, InMemoryCookieJar, LocaleCookieStore};
pub use document::DocumentAttributes;
pub use error::{LocaleError, Result};
pub use locale_store::{LocaleChange, LocaleSnapshot, LocaleStore};
pub use theme_store::{ResolvedTheme, ThemeChange, ThemeMode, ThemeStore};
