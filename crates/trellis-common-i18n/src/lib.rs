// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) primitives for Trellis.
//!
//! This crate owns the static description of the locales the dashboard
//! supports and the persisted cookie that carries the user's choice between
//! requests. It supports both left-to-right (LTR) and right-to-left (RTL)
//! languages; a locale's [`Direction`] is always looked up from the
//! [`LocaleCatalog`], never stored independently.
//!
//! # Example
//!
//! ```
//! use trellis_common_i18n::{resolve_locale, Direction, LocaleCatalog, LocaleSource};
//!
//! let catalog = LocaleCatalog::builtin();
//!
//! let resolved = resolve_locale(&catalog, Some("ar"));
//! assert_eq!(resolved.code(), "ar");
//! assert_eq!(resolved.direction(), Direction::Rtl);
//!
//! // Unknown values fall back to the catalog default
//! let resolved = resolve_locale(&catalog, Some("xx"));
//! assert_eq!(resolved.code(), "en");
//! assert_eq!(resolved.source, LocaleSource::Default);
//! ```

mod cookie;
mod error;
mod locale;
mod resolve;

pub use cookie::{cookie_value, CookieOptions, LocaleCookie, SameSite, LOCALE_COOKIE_MAX_AGE, LOCALE_COOKIE_NAME};
pub use error::CatalogError;
pub use locale::{Direction, LocaleCatalog, LocaleDescriptor, DEFAULT_LOCALE};
pub use resolve::{resolve_from_cookie_header, resolve_locale, LocaleSource, ResolvedLocale};
