//! Core route access types

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique role identifier
pub type RoleId = String;

/// Set of roles held by the current principal
///
/// Role identifiers are opaque; matching is exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: HashSet<RoleId>,
}

impl RoleSet {
    /// Create an empty role set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role to the set
    pub fn with_role(mut self, role: impl Into<RoleId>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Whether the set holds the given role
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Whether at least one of `roles` is in this set
    pub fn intersects(&self, roles: &[RoleId]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    /// Whether every role in this set is also in `other`
    pub fn is_subset(&self, other: &RoleSet) -> bool {
        self.roles.is_subset(&other.roles)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleId> {
        self.roles.iter()
    }
}

impl<S: Into<RoleId>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Route metadata
///
/// Only `roles` takes part in access decisions. The remaining fields are
/// presentation hints for the navigation layer and pass through filtering
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Display title (sidebar and breadcrumb)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Sidebar icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Roles allowed to see this route
    ///
    /// `None` means every role may see it. `Some(vec![])` means no role may.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleId>>,

    /// Skip view caching for this route
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_cache: bool,

    /// Pin the route's tag in the tags view
    #[serde(default, skip_serializing_if = "is_false")]
    pub affix: bool,

    /// Show in the breadcrumb (defaults to shown)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<bool>,

    /// Path of the sidebar entry to highlight when this route is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_menu: Option<String>,
}

/// One routable unit in a navigation tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Route path, unique among its siblings (e.g., "/permission", "page")
    pub path: String,

    /// Route name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Redirect target when the route itself is opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    /// Hide from the sidebar
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,

    /// Always show the root entry even with a single child
    #[serde(default, skip_serializing_if = "is_false")]
    pub always_show: bool,

    /// Route metadata, including the access roles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RouteMeta>,

    /// Nested routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode>>,
}

impl RouteNode {
    /// Create a new route with no metadata and no children
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the route name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(RouteMeta::default).title = Some(title.into());
        self
    }

    /// Restrict the route to the given roles
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RoleId>,
    {
        self.meta.get_or_insert_with(RouteMeta::default).roles =
            Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Set the nested routes
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Roles allowed to see this route, if access is restricted
    pub fn access_roles(&self) -> Option<&[RoleId]> {
        self.meta.as_ref()?.roles.as_deref()
    }

    /// Number of routes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map(|children| children.iter().map(RouteNode::subtree_len).sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_creation() {
        let route = RouteNode::new("/permission")
            .with_name("Permission")
            .with_title("Permission")
            .with_roles(["admin", "editor"]);

        assert_eq!(route.path, "/permission");
        assert_eq!(route.name.as_deref(), Some("Permission"));
        assert_eq!(
            route.access_roles(),
            Some(&["admin".to_string(), "editor".to_string()][..])
        );
        assert_eq!(
            route.meta.as_ref().and_then(|m| m.title.as_deref()),
            Some("Permission")
        );
    }

    #[test]
    fn test_meta_without_roles_is_unrestricted() {
        let route = RouteNode::new("/guide").with_title("Guide");
        assert!(route.meta.is_some());
        assert!(route.access_roles().is_none());
    }

    #[test]
    fn test_empty_roles_is_distinct_from_missing() {
        let route = RouteNode::new("/locked").with_roles(Vec::<String>::new());
        assert_eq!(route.access_roles(), Some(&[][..]));
    }

    #[test]
    fn test_subtree_len() {
        let route = RouteNode::new("/a").with_children(vec![
            RouteNode::new("b"),
            RouteNode::new("c").with_children(vec![RouteNode::new("d")]),
        ]);
        assert_eq!(route.subtree_len(), 4);
    }

    #[test]
    fn test_role_set() {
        let roles = RoleSet::from_iter(["editor", "viewer"]);

        assert!(roles.contains("editor"));
        assert!(!roles.contains("admin"));
        assert!(roles.intersects(&["admin".to_string(), "viewer".to_string()]));
        assert!(!roles.intersects(&[]));
        assert!(RoleSet::new().with_role("editor").is_subset(&roles));
        assert_eq!(roles.len(), 2);
    }

    #[test]
    fn test_route_json_shape() {
        let json = r#"{
            "path": "/permission",
            "alwaysShow": true,
            "meta": { "title": "Permission", "roles": ["admin"], "noCache": true },
            "children": [{ "path": "page", "name": "PagePermission" }]
        }"#;

        let route: RouteNode = serde_json::from_str(json).unwrap();
        assert!(route.always_show);
        assert!(!route.hidden);
        assert!(route.meta.as_ref().unwrap().no_cache);
        assert_eq!(route.access_roles(), Some(&["admin".to_string()][..]));

        let out = serde_json::to_value(&route).unwrap();
        assert_eq!(out["alwaysShow"], true);
        assert!(out.get("hidden").is_none());
        assert_eq!(out["children"][0]["name"], "PagePermission");
    }
}
