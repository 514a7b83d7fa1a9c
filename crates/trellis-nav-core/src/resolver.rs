// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Breadcrumb resolution.
//!
//! # Resolution Flow
//!
//! ```text
//! path ─┬─ home / dashboard ──────────────→ [home]
//!       └─ otherwise
//!            home entry
//!            + ancestry of the longest tree url that prefixes path
//!            + one dynamic entry per uncovered segment
//!            → dedupe → finalize (icon, is_last) → degenerate-path fixup
//! ```
//!
//! The tree is flattened once, when the resolver is built, because an
//! anchor's ancestry does not depend on the path being resolved.

use std::collections::HashSet;

use tracing::debug;

use crate::breadcrumb::BreadcrumbEntry;
use crate::icon::IconName;
use crate::node::{NavigationNode, NavigationTree, NodeKind};
use crate::route::{RouteConfig, RouteTable, DASHBOARD_PATH, HOME_PATH};
use crate::title::format_title;

/// Fixed root rules applied before the tree is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
	pub home_path: String,
	/// Always implicit through the home entry; never repeated in a trail.
	pub dashboard_path: String,
	/// Segments that carry no display meaning, compared case-insensitively.
	pub skip_segments: Vec<String>,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			home_path: HOME_PATH.to_string(),
			dashboard_path: DASHBOARD_PATH.to_string(),
			skip_segments: vec!["admin".to_string()],
		}
	}
}

/// A tree node with a url, and the entries its ancestry expands to.
#[derive(Debug, Clone)]
struct Anchor {
	url: String,
	trail: Vec<BreadcrumbEntry>,
}

#[derive(Debug, Hash, PartialEq, Eq)]
enum DedupKey {
	Link(String),
	Group(usize),
}

/// Computes breadcrumb trails for URL paths.
#[derive(Debug, Clone)]
pub struct BreadcrumbResolver {
	config: ResolverConfig,
	routes: RouteTable,
	home_route: RouteConfig,
	dashboard_route: RouteConfig,
	anchors: Vec<Anchor>,
}

impl BreadcrumbResolver {
	pub fn new(tree: &NavigationTree, routes: RouteTable, config: ResolverConfig) -> Self {
		let home_route = routes.get(&config.home_path).cloned().unwrap_or_else(|| {
			RouteConfig::new(config.home_path.clone(), "Home")
				.with_title_key("common.home")
				.with_icon(IconName::Home)
		});
		let dashboard_route = routes
			.get(&config.dashboard_path)
			.cloned()
			.unwrap_or_else(|| {
				RouteConfig::new(config.dashboard_path.clone(), "Dashboard Overview")
					.with_title_key("navigation.dashboard")
					.with_icon(IconName::Dashboard)
			});

		let mut chains = Vec::new();
		flatten(tree.nodes(), &mut Vec::new(), &mut HashSet::new(), &mut chains);

		let anchors = chains
			.into_iter()
			.map(|(url, chain)| Anchor {
				url: url.to_string(),
				trail: expand_chain(&chain, &routes, &config.dashboard_path),
			})
			.collect::<Vec<_>>();

		debug!(anchors = anchors.len(), "breadcrumb resolver built");

		Self {
			config,
			routes,
			home_route,
			dashboard_route,
			anchors,
		}
	}

	/// The admin sidebar with the built-in routes and root rules.
	pub fn admin_defaults() -> Self {
		Self::new(
			&NavigationTree::admin_sidebar(),
			RouteTable::admin_defaults(),
			ResolverConfig::default(),
		)
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Compute the trail for `path`. Never empty; exactly the final entry has
	/// `is_last` set.
	pub fn resolve(&self, path: &str) -> Vec<BreadcrumbEntry> {
		let home_path = self.config.home_path.as_str();

		if path == home_path {
			return vec![root_entry(&self.home_route)];
		}
		if path == self.config.dashboard_path {
			return vec![root_entry(&self.dashboard_route)];
		}

		let mut working = vec![home_entry(&self.home_route)];
		let mut covered = home_path;

		if let Some(anchor) = self.best_match(path) {
			debug!(path, anchor = %anchor.url, "matched navigation anchor");
			working.extend(anchor.trail.iter().cloned());
			if anchor.url.len() > covered.len() {
				covered = &anchor.url;
			}
		}

		if path != covered {
			working.extend(self.dynamic_entries(path, covered));
		}

		let mut trail = dedupe(working);
		self.finalize(&mut trail);

		if trail.len() == 1 && trail[0].link.as_deref() == Some(home_path) {
			self.append_unresolved_page(path, &mut trail);
		}

		debug!(path, entries = trail.len(), "resolved breadcrumbs");
		trail
	}

	/// Longest url that is a string prefix of `path`; first one wins on ties.
	fn best_match(&self, path: &str) -> Option<&Anchor> {
		let mut best: Option<&Anchor> = None;
		for anchor in &self.anchors {
			if !path.starts_with(anchor.url.as_str()) {
				continue;
			}
			if best.map_or(true, |b| anchor.url.len() > b.url.len()) {
				best = Some(anchor);
			}
		}
		best
	}

	fn is_skipped(&self, segment: &str) -> bool {
		self.config
			.skip_segments
			.iter()
			.any(|s| s.eq_ignore_ascii_case(segment))
	}

	fn dynamic_entries(&self, path: &str, covered: &str) -> Vec<BreadcrumbEntry> {
		let remaining = path.strip_prefix(covered).unwrap_or(path);
		if remaining.is_empty() || remaining == "/" {
			return Vec::new();
		}

		let mut entries = Vec::new();
		let mut current = covered.to_string();

		for segment in remaining.split('/').filter(|s| !s.is_empty()) {
			if current.is_empty() || current == "/" {
				current = format!("/{segment}");
			} else {
				current.push('/');
				current.push_str(segment);
			}

			if self.is_skipped(segment) {
				continue;
			}

			let title = match self.routes.get(&current) {
				Some(route) => route.title.clone(),
				None => format_title(segment),
			};
			entries.push(BreadcrumbEntry::dynamic(title, current.clone()));
		}

		entries
	}

	fn finalize(&self, trail: &mut [BreadcrumbEntry]) {
		let last = trail.len().saturating_sub(1);
		for (index, entry) in trail.iter_mut().enumerate() {
			entry.icon = if index == 0 {
				entry
					.icon
					.or_else(|| entry.is_home.then_some(self.home_route.icon).flatten())
			} else {
				None
			};
			entry.is_last = index == last;
		}
	}

	/// Only the home entry survived for a non-home path: add one entry for
	/// the page itself.
	fn append_unresolved_page(&self, path: &str, trail: &mut Vec<BreadcrumbEntry>) {
		if path == self.config.home_path {
			return;
		}
		trail[0].is_last = false;

		if let Some(route) = self.routes.get(path) {
			let title = route
				.title_key
				.clone()
				.unwrap_or_else(|| format_title(&route.title));
			let mut entry = BreadcrumbEntry::page(title, route.path.clone());
			entry.is_last = true;
			trail.push(entry);
			return;
		}

		match path.split('/').filter(|s| !s.is_empty()).last() {
			Some(segment) if !self.is_skipped(segment) => {
				let mut entry = BreadcrumbEntry::dynamic(format_title(segment), path);
				entry.is_last = true;
				trail.push(entry);
			}
			_ => trail[0].is_last = true,
		}
	}
}

/// Depth-first walk recording the ancestor chain of every enabled node with a
/// url. A node whose id was already recorded is skipped together with its
/// children.
fn flatten<'a>(
	nodes: &'a [NavigationNode],
	parents: &mut Vec<&'a NavigationNode>,
	recorded: &mut HashSet<&'a str>,
	out: &mut Vec<(&'a str, Vec<&'a NavigationNode>)>,
) {
	for node in nodes {
		if recorded.contains(node.id.as_str()) {
			continue;
		}

		parents.push(node);
		if let (NodeKind::Page, Some(url)) = (node.kind(), node.url.as_deref()) {
			out.push((url, parents.clone()));
			recorded.insert(node.id.as_str());
		}
		if node.has_children() {
			flatten(&node.items, parents, recorded, out);
		}
		parents.pop();
	}
}

fn expand_chain(
	chain: &[&NavigationNode],
	routes: &RouteTable,
	dashboard_path: &str,
) -> Vec<BreadcrumbEntry> {
	chain
		.iter()
		.filter_map(|node| chain_entry(node, routes))
		.filter(|entry| entry.link.as_deref() != Some(dashboard_path))
		.collect()
}

fn chain_entry(node: &NavigationNode, routes: &RouteTable) -> Option<BreadcrumbEntry> {
	let route = node.url.as_deref().and_then(|url| routes.get(url));

	let title = match node.title_key.as_ref().or(node.label_key.as_ref()) {
		Some(key) => key.clone(),
		None => {
			let literal = node
				.title
				.as_deref()
				.or(node.label.as_deref())
				.or(route.map(|r| r.title.as_str()))
				.or_else(|| node.url.as_deref().and_then(|url| url.rsplit('/').next()))
				.unwrap_or("Unnamed");
			format_title(literal)
		}
	};

	let mut entry = match (node.kind(), node.url.as_deref()) {
		(NodeKind::Page, Some(url)) => BreadcrumbEntry::page(title, url),
		(NodeKind::Group, _) => BreadcrumbEntry::group(title),
		_ => return None,
	};
	entry.icon = node.icon.or_else(|| route.and_then(|r| r.icon));
	Some(entry)
}

fn root_entry(route: &RouteConfig) -> BreadcrumbEntry {
	let mut entry = home_entry(route);
	entry.is_last = true;
	entry
}

fn home_entry(route: &RouteConfig) -> BreadcrumbEntry {
	let title = route
		.title_key
		.clone()
		.unwrap_or_else(|| format_title(&route.title));
	BreadcrumbEntry::home(title, route.path.clone(), route.icon)
}

fn dedupe(entries: Vec<BreadcrumbEntry>) -> Vec<BreadcrumbEntry> {
	let mut seen = HashSet::new();
	entries
		.into_iter()
		.enumerate()
		.filter(|(index, entry)| {
			let key = match &entry.link {
				Some(link) => DedupKey::Link(link.clone()),
				None => DedupKey::Group(*index),
			};
			seen.insert(key)
		})
		.map(|(_, entry)| entry)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn users_and_roles_tree() -> NavigationTree {
		NavigationTree::new(vec![NavigationNode::group(
			"users-roles",
			"Users & Roles",
			vec![
				NavigationNode::page("users", "/admin/users"),
				NavigationNode::page("roles", "/admin/roles"),
			],
		)])
	}

	fn resolver(tree: NavigationTree) -> BreadcrumbResolver {
		BreadcrumbResolver::new(&tree, RouteTable::new(), ResolverConfig::default())
	}

	fn titles(trail: &[BreadcrumbEntry]) -> Vec<&str> {
		trail.iter().map(|e| e.title.as_str()).collect()
	}

	#[test]
	fn test_home_path_is_single_home_entry() {
		let trail = resolver(users_and_roles_tree()).resolve("/");
		assert_eq!(trail.len(), 1);
		assert!(trail[0].is_home);
		assert!(trail[0].is_last);
		assert_eq!(trail[0].link.as_deref(), Some("/"));
		assert_eq!(trail[0].icon, Some(IconName::Home));
	}

	#[test]
	fn test_dashboard_path_is_single_home_entry_regardless_of_tree() {
		for tree in [NavigationTree::default(), NavigationTree::admin_sidebar(), users_and_roles_tree()] {
			let trail = resolver(tree).resolve(DASHBOARD_PATH);
			assert_eq!(trail.len(), 1);
			assert!(trail[0].is_home);
			assert!(trail[0].is_last);
			assert_eq!(trail[0].title, "navigation.dashboard");
			assert_eq!(trail[0].icon, Some(IconName::Dashboard));
		}
	}

	#[test]
	fn test_group_ancestry() {
		let trail = resolver(users_and_roles_tree()).resolve("/admin/roles");
		assert_eq!(titles(&trail), vec!["common.home", "Users & Roles", "Roles"]);

		assert!(trail[0].is_home);
		assert!(trail[1].is_group);
		assert_eq!(trail[1].link, None);
		assert_eq!(trail[2].link.as_deref(), Some("/admin/roles"));
		assert!(trail[2].is_last);
		assert!(!trail[0].is_last && !trail[1].is_last);
	}

	#[test]
	fn test_multi_word_literals_keep_single_spaces() {
		let tree = NavigationTree::new(vec![NavigationNode::group(
			"audit",
			"Audit Log",
			vec![NavigationNode::page("events", "/admin/audit/events").with_title("Recent Events")],
		)]);
		let trail = resolver(tree).resolve("/admin/audit/events");
		assert_eq!(titles(&trail), vec!["common.home", "Audit Log", "Recent Events"]);
	}

	#[test]
	fn test_disabled_page_does_not_anchor() {
		let tree = NavigationTree::new(vec![NavigationNode::group(
			"users-roles",
			"Users & Roles",
			vec![NavigationNode {
				disabled: true,
				..NavigationNode::page("roles", "/admin/roles")
			}],
		)]);
		let trail = resolver(tree).resolve("/admin/roles");
		assert_eq!(titles(&trail), vec!["common.home", "Roles"]);
		assert!(trail[1].is_dynamic);
		assert!(!trail.iter().any(|e| e.is_group));
	}

	#[test]
	fn test_unmatched_path_yields_dynamic_segments() {
		let trail = resolver(users_and_roles_tree()).resolve("/admin/unknown/42");
		assert_eq!(titles(&trail), vec!["common.home", "Unknown", "42"]);
		assert!(trail[1].is_dynamic);
		assert_eq!(trail[1].link.as_deref(), Some("/admin/unknown"));
		assert!(trail[2].is_dynamic);
		assert!(trail[2].is_last);
		assert_eq!(trail[2].link.as_deref(), Some("/admin/unknown/42"));
	}

	#[test]
	fn test_longest_prefix_anchors_detail_pages() {
		let trail = resolver(users_and_roles_tree()).resolve("/admin/users/42/edit");
		assert_eq!(titles(&trail), vec!["common.home", "Users & Roles", "Users", "42", "Edit"]);
		assert!(!trail[2].is_dynamic);
		assert!(trail[3].is_dynamic);
		assert_eq!(trail[3].link.as_deref(), Some("/admin/users/42"));
	}

	#[test]
	fn test_longest_prefix_wins() {
		let tree = NavigationTree::new(vec![
			NavigationNode::page("users", "/admin/users").with_title("Users"),
			NavigationNode::page("invites", "/admin/users/invites").with_title("Invites"),
		]);
		let trail = resolver(tree).resolve("/admin/users/invites/7");
		assert_eq!(titles(&trail), vec!["common.home", "Invites", "7"]);
	}

	#[test]
	fn test_prefix_match_is_not_segment_aware() {
		let tree = NavigationTree::new(vec![NavigationNode::page("user", "/admin/user").with_title("User")]);
		let trail = resolver(tree).resolve("/admin/users");
		assert_eq!(titles(&trail), vec!["common.home", "User", "S"]);
		assert_eq!(trail[2].link.as_deref(), Some("/admin/user/s"));
	}

	#[test]
	fn test_translation_keys_take_priority() {
		let trail = BreadcrumbResolver::admin_defaults().resolve("/admin/permissions");
		assert_eq!(
			titles(&trail),
			vec![
				"common.home",
				"navigation.usersManagement",
				"navigation.rolesAndPermissions",
				"navigation.permissions"
			]
		);
	}

	#[test]
	fn test_only_first_entry_keeps_icon() {
		let trail = BreadcrumbResolver::admin_defaults().resolve("/admin/users");
		assert_eq!(trail[0].icon, Some(IconName::Home));
		assert!(trail[1..].iter().all(|e| e.icon.is_none()));
	}

	#[test]
	fn test_dashboard_is_not_repeated_below_home() {
		let trail = BreadcrumbResolver::admin_defaults().resolve("/admin/dashboard/widgets");
		assert_eq!(titles(&trail), vec!["common.home", "Widgets"]);
	}

	#[test]
	fn test_route_titles_for_dynamic_segments() {
		let routes = RouteTable::new().with(RouteConfig::new("/reports", "Monthly Reports"));
		let resolver = BreadcrumbResolver::new(&NavigationTree::default(), routes, ResolverConfig::default());
		let trail = resolver.resolve("/reports/2024");
		assert_eq!(titles(&trail), vec!["common.home", "Monthly Reports", "2024"]);
	}

	#[test]
	fn test_skipped_segment_alone_stays_on_home() {
		let trail = resolver(users_and_roles_tree()).resolve("/admin");
		assert_eq!(trail.len(), 1);
		assert!(trail[0].is_home);
		assert!(trail[0].is_last);
	}

	#[test]
	fn test_degenerate_path_uses_exact_route() {
		let routes = RouteTable::new().with(RouteConfig::new("/admin", "Administration").with_title_key("navigation.admin"));
		let resolver = BreadcrumbResolver::new(&NavigationTree::default(), routes, ResolverConfig::default());
		let trail = resolver.resolve("/admin");
		assert_eq!(titles(&trail), vec!["common.home", "navigation.admin"]);
		assert!(!trail[0].is_last);
		assert!(trail[1].is_last);
		assert!(!trail[1].is_dynamic);
	}

	#[test]
	fn test_degenerate_path_uses_last_segment() {
		let config = ResolverConfig {
			skip_segments: vec!["admin".to_string(), "reports".to_string()],
			..Default::default()
		};
		let resolver = BreadcrumbResolver::new(&NavigationTree::default(), RouteTable::new(), config.clone());
		// Every segment skipped during the dynamic pass
		let trail = resolver.resolve("/admin/reports");
		assert_eq!(trail.len(), 1);
		assert!(trail[0].is_last);

		// A tree node equal to home is deduplicated away, leaving home alone
		let tree = NavigationTree::new(vec![NavigationNode::page("root", "/").with_title("Root")]);
		let resolver = BreadcrumbResolver::new(&tree, RouteTable::new(), config);
		let trail = resolver.resolve("/admin/reports/");
		assert_eq!(trail.len(), 1);
		assert!(trail[0].is_last);
	}

	#[test]
	fn test_duplicate_ids_are_walked_once() {
		let tree = NavigationTree::new(vec![
			NavigationNode::page("users", "/admin/users").with_title("Users"),
			NavigationNode::group(
				"again",
				"Again",
				vec![NavigationNode::page("users", "/admin/users/all").with_title("All")],
			),
		]);
		let trail = resolver(tree).resolve("/admin/users/all");
		assert_eq!(titles(&trail), vec!["common.home", "Users", "All"]);
		assert!(trail[2].is_dynamic);
	}

	#[test]
	fn test_inert_nodes_are_skipped_in_ancestry() {
		let tree = NavigationTree::new(vec![NavigationNode {
			id: "wrapper".to_string(),
			items: vec![NavigationNode::page("reports", "/reports").with_title("Reports")],
			..Default::default()
		}]);
		let trail = resolver(tree).resolve("/reports");
		assert_eq!(titles(&trail), vec!["common.home", "Reports"]);
	}

	#[test]
	fn test_literal_fallbacks() {
		let routes = RouteTable::new().with(RouteConfig::new("/audit", "audit trail"));
		let tree = NavigationTree::new(vec![
			NavigationNode::page("audit", "/audit"),
			NavigationNode::page("usage", "/usage-stats"),
		]);
		let resolver = BreadcrumbResolver::new(&tree, routes, ResolverConfig::default());
		assert_eq!(titles(&resolver.resolve("/audit")), vec!["common.home", "Audit Trail"]);
		assert_eq!(titles(&resolver.resolve("/usage-stats")), vec!["common.home", "Usage Stats"]);
	}

	#[test]
	fn test_custom_home_route() {
		let routes = RouteTable::new().with(RouteConfig::new("/", "Start").with_icon(IconName::Menu));
		let resolver = BreadcrumbResolver::new(&NavigationTree::default(), routes, ResolverConfig::default());
		let trail = resolver.resolve("/x");
		assert_eq!(trail[0].title, "Start");
		assert_eq!(trail[0].icon, Some(IconName::Menu));
	}

	proptest! {
		/// Every trail is non-empty and only its final entry is marked last.
		#[test]
		fn exactly_one_last_entry(path in "/[a-zA-Z0-9/_-]{0,40}") {
			let resolver = BreadcrumbResolver::admin_defaults();
			let trail = resolver.resolve(&path);
			prop_assert!(!trail.is_empty());
			prop_assert!(trail.last().unwrap().is_last);
			prop_assert_eq!(trail.iter().filter(|e| e.is_last).count(), 1);
		}

		/// The first entry is always the home entry.
		#[test]
		fn trail_starts_at_home(path in "/[a-z0-9/]{0,40}") {
			let trail = resolver(users_and_roles_tree()).resolve(&path);
			prop_assert!(trail[0].is_home);
			prop_assert!(trail[1..].iter().all(|e| !e.is_home && e.icon.is_none()));
		}
	}
}
