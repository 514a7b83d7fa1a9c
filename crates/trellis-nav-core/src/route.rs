// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route descriptions keyed by exact path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::icon::IconName;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/auth/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Display metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
	pub path: String,
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<IconName>,
	#[serde(default)]
	pub requires_auth: bool,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub roles: Vec<String>,
}

impl RouteConfig {
	pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			title: title.into(),
			title_key: None,
			description: None,
			icon: None,
			requires_auth: false,
			roles: Vec::new(),
		}
	}

	pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
		self.title_key = Some(key.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_icon(mut self, icon: IconName) -> Self {
		self.icon = Some(icon);
		self
	}

	pub fn authenticated(mut self, roles: &[&str]) -> Self {
		self.requires_auth = true;
		self.roles = roles.iter().map(|r| r.to_string()).collect();
		self
	}
}

/// Lookup from exact path to route description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
	routes: BTreeMap<String, RouteConfig>,
}

impl RouteTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a route, replacing any previous description for the same path.
	pub fn insert(&mut self, route: RouteConfig) {
		self.routes.insert(route.path.clone(), route);
	}

	pub fn with(mut self, route: RouteConfig) -> Self {
		self.insert(route);
		self
	}

	pub fn get(&self, path: &str) -> Option<&RouteConfig> {
		self.routes.get(path)
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &RouteConfig> {
		self.routes.values()
	}

	/// Built-in routes of the admin dashboard.
	pub fn admin_defaults() -> Self {
		Self::new()
			.with(
				RouteConfig::new(HOME_PATH, "Home")
					.with_title_key("common.home")
					.with_description("Main application landing page.")
					.with_icon(IconName::Home),
			)
			.with(
				RouteConfig::new(LOGIN_PATH, "Login")
					.with_title_key("auth.signIn")
					.with_description("Access your account.")
					.with_icon(IconName::SignIn),
			)
			.with(
				RouteConfig::new(DASHBOARD_PATH, "Dashboard Overview")
					.with_title_key("navigation.dashboard")
					.with_description("Comprehensive overview of activities and key metrics.")
					.with_icon(IconName::Dashboard)
					.authenticated(&[]),
			)
			.with(
				RouteConfig::new("/admin/profile", "My Profile")
					.with_title_key("navigation.profile")
					.with_description("View and manage your personal profile information.")
					.with_icon(IconName::Profile)
					.authenticated(&[]),
			)
			.with(
				RouteConfig::new("/admin/users", "User Management")
					.with_title_key("navigation.users")
					.with_description("Administer user accounts, roles, and permissions.")
					.with_icon(IconName::Users)
					.authenticated(&["Admin", "Editor"]),
			)
			.with(
				RouteConfig::new("/admin/roles", "Role Management")
					.with_title_key("navigation.roles")
					.with_description("Define and manage user roles within the application.")
					.with_icon(IconName::Shield)
					.authenticated(&["Admin"]),
			)
			.with(
				RouteConfig::new("/admin/permissions", "Permission Management")
					.with_title_key("navigation.permissions")
					.with_description("Configure permissions associated with different roles.")
					.with_icon(IconName::Permission)
					.authenticated(&["Admin"]),
			)
			.with(
				RouteConfig::new("/admin/settings", "Application Settings")
					.with_title_key("navigation.settings")
					.with_description("Adjust and configure global application settings.")
					.with_icon(IconName::Settings)
					.authenticated(&["Admin"]),
			)
	}
}

impl FromIterator<RouteConfig> for RouteTable {
	fn from_iter<I: IntoIterator<Item = RouteConfig>>(iter: I) -> Self {
		let mut table = Self::new();
		for route in iter {
			table.insert(route);
		}
		table
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_admin_defaults_cover_known_paths() {
		let table = RouteTable::admin_defaults();
		assert_eq!(table.len(), 8);
		for path in [HOME_PATH, LOGIN_PATH, DASHBOARD_PATH, "/admin/users", "/admin/settings"] {
			assert!(table.get(path).is_some(), "missing {path}");
		}
	}

	#[test]
	fn test_home_route() {
		let table = RouteTable::admin_defaults();
		let home = table.get(HOME_PATH).unwrap();
		assert_eq!(home.title_key.as_deref(), Some("common.home"));
		assert_eq!(home.icon, Some(IconName::Home));
		assert!(!home.requires_auth);
	}

	#[test]
	fn test_role_restrictions() {
		let table = RouteTable::admin_defaults();
		let users = table.get("/admin/users").unwrap();
		assert!(users.requires_auth);
		assert!(users.roles.iter().any(|r| r == "Editor"));
		assert!(!users.roles.iter().any(|r| r == "Viewer"));

		let profile = table.get("/admin/profile").unwrap();
		assert!(profile.roles.is_empty());
	}

	#[test]
	fn test_insert_replaces() {
		let mut table = RouteTable::new();
		table.insert(RouteConfig::new("/a", "First"));
		table.insert(RouteConfig::new("/a", "Second"));
		assert_eq!(table.len(), 1);
		assert_eq!(table.get("/a").unwrap().title, "Second");
	}

	#[test]
	fn test_collect_from_iterator() {
		let table: RouteTable = vec![RouteConfig::new("/a", "A"), RouteConfig::new("/b", "B")]
			.into_iter()
			.collect();
		assert_eq!(table.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
	}
}
