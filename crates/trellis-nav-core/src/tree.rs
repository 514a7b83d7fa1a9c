// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookups over the navigation tree used by sidebar rendering.

use serde::Serialize;

use crate::node::{NavigationNode, NavigationTree};

/// Where a url sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbNavigation<'a> {
	/// Root-to-node chain ending at the node with the url.
	pub path: Vec<&'a NavigationNode>,
	/// The first labelled group on the chain, if any.
	pub group: Option<&'a NavigationNode>,
	pub item: &'a NavigationNode,
}

/// One row of the sidebar in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNavigationItem<'a> {
	pub node: &'a NavigationNode,
	pub level: usize,
	pub is_group: bool,
	/// Id of the nearest enclosing group.
	pub parent_group: Option<&'a str>,
	pub has_children: bool,
}

fn contains_url(node: &NavigationNode, url: &str) -> bool {
	node.url.as_deref() == Some(url) || node.items.iter().any(|child| contains_url(child, url))
}

fn is_render_group(node: &NavigationNode) -> bool {
	node.is_labelled_group() && node.has_children()
}

impl NavigationTree {
	/// The top-level node whose subtree holds `url`.
	pub fn find_group_for_url(&self, url: &str) -> Option<&NavigationNode> {
		self.nodes().iter().find(|node| contains_url(node, url))
	}

	/// Root-to-node chain for the first node with `url`, depth first.
	pub fn item_path(&self, url: &str) -> Option<Vec<&NavigationNode>> {
		fn walk<'a>(nodes: &'a [NavigationNode], url: &str, chain: &mut Vec<&'a NavigationNode>) -> bool {
			for node in nodes {
				chain.push(node);
				if node.url.as_deref() == Some(url) || walk(&node.items, url, chain) {
					return true;
				}
				chain.pop();
			}
			false
		}

		let mut chain = Vec::new();
		walk(self.nodes(), url, &mut chain).then_some(chain)
	}

	pub fn breadcrumb_navigation(&self, url: &str) -> Option<BreadcrumbNavigation<'_>> {
		let path = self.item_path(url)?;
		let item = *path.last()?;
		let group = path.iter().copied().find(|node| node.is_labelled_group());
		Some(BreadcrumbNavigation { path, group, item })
	}

	/// A copy with every level ordered by `order`; unordered nodes sort last
	/// and ties keep their declaration order.
	pub fn sorted(&self) -> NavigationTree {
		fn sort_level(nodes: &[NavigationNode]) -> Vec<NavigationNode> {
			let mut sorted: Vec<NavigationNode> = nodes
				.iter()
				.map(|node| NavigationNode {
					items: sort_level(&node.items),
					..node.clone()
				})
				.collect();
			sorted.sort_by_key(NavigationNode::sort_key);
			sorted
		}

		NavigationTree::new(sort_level(self.nodes()))
	}

	/// Every node in depth-first render order with its nesting level.
	pub fn flatten_navigation(&self) -> Vec<FlatNavigationItem<'_>> {
		fn walk<'a>(
			nodes: &'a [NavigationNode],
			level: usize,
			parent_group: Option<&'a str>,
			out: &mut Vec<FlatNavigationItem<'a>>,
		) {
			for node in nodes {
				let is_group = is_render_group(node);
				out.push(FlatNavigationItem {
					node,
					level,
					is_group,
					parent_group,
					has_children: node.has_children(),
				});
				if node.has_children() {
					let group = if is_group { Some(node.id.as_str()) } else { parent_group };
					walk(&node.items, level + 1, group, out);
				}
			}
		}

		let mut out = Vec::new();
		walk(self.nodes(), 0, None, &mut out);
		out
	}
}
