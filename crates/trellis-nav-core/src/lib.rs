// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation model and breadcrumb resolution for the Trellis dashboard.
//!
//! This crate is pure: it holds the static sidebar tree, the route table and
//! the resolver that turns a URL path into a breadcrumb trail. It performs no
//! I/O and has no notion of the current locale beyond icon mirroring.
//!
//! # Example
//!
//! ```
//! use trellis_nav_core::BreadcrumbResolver;
//!
//! let resolver = BreadcrumbResolver::admin_defaults();
//! let trail = resolver.resolve("/admin/users/42");
//!
//! assert!(trail[0].is_home);
//! assert_eq!(trail.last().map(|e| e.title.as_str()), Some("42"));
//! ```

pub mod breadcrumb;
pub mod error;
pub mod icon;
pub mod node;
pub mod resolver;
pub mod route;
pub mod title;
pub mod tree;

pub use breadcrumb::BreadcrumbEntry;
pub use error::{NavError, Result};
pub use icon::IconName;
pub use node::{NavigationNode, NavigationTree, NodeKind, UNORDERED};
pub use resolver::{BreadcrumbResolver, ResolverConfig};
pub use route::{RouteConfig, RouteTable, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH};
pub use title::format_title;
pub use tree::{BreadcrumbNavigation, FlatNavigationItem};
