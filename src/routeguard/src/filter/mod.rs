//! Route filter
//!
//! Prunes a route tree down to the routes a role set may see.
//!
//! # Rules
//!
//! - A route without access roles is visible to everyone
//! - A route with access roles is visible when it shares at least one role
//!   with the principal
//! - A hidden route takes its whole subtree with it; children of a hidden
//!   route are never inspected
//! - Sibling order is preserved at every depth
//!
//! # Example
//!
//! ```rust
//! use routeguard::{filter_routes, RoleSet, RouteNode};
//!
//! let routes = vec![
//!     RouteNode::new("a").with_roles(["editor"]),
//!     RouteNode::new("b"),
//! ];
//!
//! let visible = filter_routes(&routes, &RoleSet::from_iter(["viewer"]));
//! assert_eq!(visible, vec![RouteNode::new("b")]);
//! ```


use crate::types::{RoleSet, RouteNode};
use tracing::debug;

/// Check whether `roles` may see `route`
///
/// Only the route's own access roles are consulted, never its children's.
pub fn has_permission(roles: &RoleSet, route: &RouteNode) -> bool {
    match route.access_roles() {
        Some(allowed) => roles.intersects(allowed),
        None => true,
    }
}

/// Filter `routes` recursively, returning a pruned copy
///
/// The input is left untouched.
pub fn filter_routes(routes: &[RouteNode], roles: &RoleSet) -> Vec<RouteNode> {
    let filtered = filter_level(routes, roles);

    debug!(
        input = routes.len(),
        output = filtered.len(),
        roles = roles.len(),
        "Filtered route tree"
    );

    filtered
}

fn filter_level(routes: &[RouteNode], roles: &RoleSet) -> Vec<RouteNode> {
    routes
        .iter()
        .filter(|route| has_permission(roles, route))
        .map(|route| {
            let mut copy = route.clone();
            if let Some(children) = route.children.as_deref() {
                copy.children = Some(filter_level(children, roles));
            }
            copy
        })
        .collect()
}
