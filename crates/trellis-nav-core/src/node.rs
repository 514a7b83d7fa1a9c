// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The static navigation tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};
use crate::icon::IconName;

/// Sort key used for nodes without an explicit `order`.
pub const UNORDERED: u32 = 999;

/// A node in the sidebar navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<IconName>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order: Option<u32>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub items: Vec<NavigationNode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub badge: Option<String>,
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub disabled: bool,
}

/// What a node is, derived from which fields it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// Navigable: has a URL.
	Page,
	/// No URL, has children and something to display.
	Group,
	/// Neither; rendered inert.
	Inert,
}

impl NavigationNode {
	/// A navigable page node.
	pub fn page(id: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			url: Some(url.into()),
			..Default::default()
		}
	}

	/// A labelled group node with children.
	pub fn group(id: impl Into<String>, label: impl Into<String>, items: Vec<NavigationNode>) -> Self {
		Self {
			id: id.into(),
			label: Some(label.into()),
			items,
			..Default::default()
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
		self.title_key = Some(key.into());
		self
	}

	pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
		self.label_key = Some(key.into());
		self
	}

	pub fn with_icon(mut self, icon: IconName) -> Self {
		self.icon = Some(icon);
		self
	}

	pub fn with_order(mut self, order: u32) -> Self {
		self.order = Some(order);
		self
	}

	pub fn has_children(&self) -> bool {
		!self.items.is_empty()
	}

	/// True when any of the title or label fields is present.
	pub fn has_title_information(&self) -> bool {
		self.title_key.is_some() || self.label_key.is_some() || self.title.is_some() || self.label.is_some()
	}

	/// True for url-less nodes that carry a label key or label.
	pub fn is_labelled_group(&self) -> bool {
		self.url.is_none() && (self.label_key.is_some() || self.label.is_some())
	}

	/// Disabled nodes are inert whatever else they carry.
	pub fn kind(&self) -> NodeKind {
		if self.disabled {
			NodeKind::Inert
		} else if self.url.is_some() {
			NodeKind::Page
		} else if self.has_children() && self.has_title_information() {
			NodeKind::Group
		} else {
			NodeKind::Inert
		}
	}

	pub fn sort_key(&self) -> u32 {
		self.order.unwrap_or(UNORDERED)
	}
}

/// An ordered, immutable sequence of top-level navigation nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTree {
	nodes: Vec<NavigationNode>,
}

impl NavigationTree {
	pub fn new(nodes: Vec<NavigationNode>) -> Self {
		Self { nodes }
	}

	/// Parse a tree from a JSON array of nodes.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn nodes(&self) -> &[NavigationNode] {
		&self.nodes
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Reject trees in which two nodes share an id.
	pub fn validate(&self) -> Result<()> {
		fn walk<'a>(nodes: &'a [NavigationNode], seen: &mut HashSet<&'a str>) -> Result<()> {
			for node in nodes {
				if !seen.insert(node.id.as_str()) {
					return Err(NavError::DuplicateId(node.id.clone()));
				}
				walk(&node.items, seen)?;
			}
			Ok(())
		}

		walk(&self.nodes, &mut HashSet::new())
	}

	/// The dashboard's built-in sidebar.
	pub fn admin_sidebar() -> Self {
		Self::new(vec![
			NavigationNode::page("dashboard", "/admin/dashboard")
				.with_title_key("navigation.dashboard")
				.with_title("Dashboard")
				.with_icon(IconName::Dashboard)
				.with_order(1),
			NavigationNode::group(
				"usersManagement",
				"User Management",
				vec![
					NavigationNode::page("usersManagement-usersList", "/admin/users")
						.with_title_key("navigation.users")
						.with_title("Users")
						.with_icon(IconName::Users)
						.with_order(1),
					NavigationNode::group(
						"usersManagement-rolesPermissions",
						"Roles & Permissions",
						vec![
							NavigationNode::page("usersManagement-rolesPermissions-roles", "/admin/roles")
								.with_title_key("navigation.roles")
								.with_title("Roles")
								.with_order(1),
							NavigationNode::page(
								"usersManagement-rolesPermissions-permissions",
								"/admin/permissions",
							)
							.with_title_key("navigation.permissions")
							.with_title("Permissions")
							.with_order(2),
						],
					)
					.with_label_key("navigation.rolesAndPermissions")
					.with_icon(IconName::Shield)
					.with_order(2),
				],
			)
			.with_label_key("navigation.usersManagement")
			.with_icon(IconName::Users)
			.with_order(2),
			NavigationNode::group(
				"settings",
				"Settings",
				vec![NavigationNode::page("settings-general", "/admin/settings")
					.with_title_key("navigation.generalSettings")
					.with_title("General Settings")
					.with_icon(IconName::Settings)
					.with_order(1)],
			)
			.with_label_key("navigation.settingsGroup")
			.with_icon(IconName::Settings)
			.with_order(3),
		])
	}
}

impl From<Vec<NavigationNode>> for NavigationTree {
	fn from(nodes: Vec<NavigationNode>) -> Self {
		Self::new(nodes)
	}
}
