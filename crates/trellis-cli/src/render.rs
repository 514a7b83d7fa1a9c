// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Plain-text rendering for terminal output.

use std::fmt::Write;

use http::HeaderMap;
use trellis_common_i18n::LocaleCatalog;
use trellis_nav_core::{BreadcrumbEntry, FlatNavigationItem, NodeKind};

const SEPARATOR: &str = " › ";

/// One-line trail, e.g. `common.home › Users › 42`.
pub fn breadcrumb_line(trail: &[BreadcrumbEntry]) -> String {
	trail
		.iter()
		.map(|e| e.title.as_str())
		.collect::<Vec<_>>()
		.join(SEPARATOR)
}

/// One row per entry with link and flags.
pub fn breadcrumb_table(trail: &[BreadcrumbEntry]) -> String {
	let width = trail.iter().map(|e| e.title.chars().count()).max().unwrap_or(0);
	let mut out = String::new();
	for entry in trail {
		let mut flags = Vec::new();
		if entry.is_home {
			flags.push("home");
		}
		if entry.is_group {
			flags.push("group");
		}
		if entry.is_dynamic {
			flags.push("dynamic");
		}
		if entry.is_last {
			flags.push("last");
		}
		if let Some(icon) = entry.icon {
			flags.push(icon.as_str());
		}
		let _ = writeln!(
			out,
			"{:<width$}  {:<24}  {}",
			entry.title,
			entry.link.as_deref().unwrap_or("-"),
			flags.join(","),
		);
	}
	out
}

pub fn navigation_outline(items: &[FlatNavigationItem<'_>]) -> String {
	let mut out = String::new();
	for item in items {
		let node = item.node;
		let name = node
			.title_key
			.as_deref()
			.or(node.label_key.as_deref())
			.or(node.title.as_deref())
			.or(node.label.as_deref())
			.unwrap_or(node.id.as_str());
		let indent = "  ".repeat(item.level);
		let badge = node.badge.as_deref().map(|b| format!(" [{b}]")).unwrap_or_default();
		match (node.kind(), node.url.as_deref()) {
			(NodeKind::Page, Some(url)) => {
				let _ = writeln!(out, "{indent}{name}{badge}  {url}");
			}
			(NodeKind::Group, _) => {
				let _ = writeln!(out, "{indent}{name}/{badge}");
			}
			_ if node.disabled => {
				let _ = writeln!(out, "{indent}{name}{badge}  (disabled)");
			}
			_ => {
				let _ = writeln!(out, "{indent}{name}{badge}  (inert)");
			}
		}
	}
	out
}

pub fn locale_table(catalog: &LocaleCatalog) -> String {
	let default = catalog.default_locale().code.as_str();
	let mut out = String::new();
	for locale in catalog.iter() {
		let marker = if locale.code == default { "*" } else { " " };
		let _ = writeln!(
			out,
			"{marker} {:<4} {:<3} {} {}",
			locale.code,
			locale.direction.as_str(),
			locale.flag,
			locale.name
		);
	}
	out
}

pub fn header_lines(headers: &HeaderMap) -> String {
	let mut out = String::new();
	for (name, value) in headers {
		let _ = writeln!(out, "{}: {}", name, value.to_str().unwrap_or("<binary>"));
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use trellis_nav_core::{BreadcrumbResolver, NavigationNode, NavigationTree};

	#[test]
	fn test_breadcrumb_line() {
		let trail = BreadcrumbResolver::admin_defaults().resolve("/admin/users/42");
		assert_eq!(
			breadcrumb_line(&trail),
			"common.home › navigation.usersManagement › navigation.users › 42"
		);
	}

	#[test]
	fn test_breadcrumb_table_flags() {
		let trail = BreadcrumbResolver::admin_defaults().resolve("/");
		let table = breadcrumb_table(&trail);
		assert!(table.contains("home,last,Home"));
	}

	#[test]
	fn test_navigation_outline_indents_children() {
		let tree = NavigationTree::admin_sidebar();
		let outline = navigation_outline(&tree.flatten_navigation());
		assert!(outline.contains("navigation.usersManagement/\n"));
		assert!(outline.contains("\n    navigation.roles  /admin/roles\n"));
	}

	#[test]
	fn test_navigation_outline_marks_badges_and_disabled() {
		let tree = NavigationTree::new(vec![
			NavigationNode {
				badge: Some("new".to_string()),
				..NavigationNode::page("reports", "/admin/reports").with_title("Reports")
			},
			NavigationNode {
				disabled: true,
				..NavigationNode::page("billing", "/admin/billing").with_title("Billing")
			},
		]);
		let outline = navigation_outline(&tree.flatten_navigation());
		assert_eq!(outline, "Reports [new]  /admin/reports\nBilling  (disabled)\n");
	}

	#[test]
	fn test_locale_table_marks_default() {
		let table = locale_table(&LocaleCatalog::builtin());
		assert!(table.lines().next().unwrap().starts_with("* en"));
		assert!(table.contains("ar   rtl"));
	}
}
