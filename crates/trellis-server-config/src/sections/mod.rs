// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod environment;
mod locale;
mod logging;
mod rate_limit;
mod site;

pub use environment::Environment;
pub use locale::{LocaleConfig, LocaleConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use rate_limit::{RateLimitConfig, RateLimitConfigLayer};
pub use site::{SiteConfig, SiteConfigLayer};
