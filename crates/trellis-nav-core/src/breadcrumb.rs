// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::icon::IconName;

/// One entry of a computed breadcrumb trail.
///
/// `title` is either a translation key (when the source node or route carries
/// one) or an already formatted literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbEntry {
	pub title: String,
	/// `None` for non-navigable group entries.
	pub link: Option<String>,
	pub icon: Option<IconName>,
	pub is_home: bool,
	pub is_last: bool,
	pub is_group: bool,
	pub is_dynamic: bool,
}

impl BreadcrumbEntry {
	pub(crate) fn page(title: String, link: impl Into<String>) -> Self {
		Self {
			title,
			link: Some(link.into()),
			icon: None,
			is_home: false,
			is_last: false,
			is_group: false,
			is_dynamic: false,
		}
	}

	pub(crate) fn group(title: String) -> Self {
		Self {
			title,
			link: None,
			icon: None,
			is_home: false,
			is_last: false,
			is_group: true,
			is_dynamic: false,
		}
	}

	pub(crate) fn home(title: String, link: impl Into<String>, icon: Option<IconName>) -> Self {
		Self {
			icon,
			is_home: true,
			..Self::page(title, link)
		}
	}

	pub(crate) fn dynamic(title: String, link: impl Into<String>) -> Self {
		Self {
			is_dynamic: true,
			..Self::page(title, link)
		}
	}
}
