//! Route table loading and validation
//!
//! A route table is the JSON document a routing configuration provider
//! hands over: the always-visible `constantRoutes` and the role-gated
//! `asyncRoutes`.
//!
//! ```json
//! {
//!   "constantRoutes": [{ "path": "/login", "hidden": true }],
//!   "asyncRoutes": [{ "path": "/permission", "meta": { "roles": ["admin"] } }]
//! }
//! ```

use crate::config::AccessConfig;
use crate::error::{Result, RouteError};
use crate::state::AccessState;
use crate::types::RouteNode;

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Base and candidate route trees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTable {
    /// Routes every principal may reach
    #[serde(default, deserialize_with = "null_as_empty")]
    pub constant_routes: Vec<RouteNode>,

    /// Routes gated by role
    #[serde(default, deserialize_with = "null_as_empty")]
    pub async_routes: Vec<RouteNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<RouteNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RouteNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RouteTable {
    pub fn new(constant_routes: Vec<RouteNode>, async_routes: Vec<RouteNode>) -> Self {
        Self {
            constant_routes,
            async_routes,
        }
    }

    /// Parse a route table from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: RouteTable = serde_json::from_str(json)?;

        info!(
            constant = table.constant_routes.len(),
            candidate = table.async_routes.len(),
            "Parsed route table"
        );

        Ok(table)
    }

    /// Read and parse a route table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;

        info!(path = %path.display(), "Loaded route table");

        Ok(table)
    }

    /// Check the structure of both trees
    ///
    /// Every path must be non-empty, sibling paths must be unique (the top
    /// levels of both trees count as siblings since they end up side by
    /// side), and no route may nest deeper than `max_depth`.
    pub fn validate(&self, max_depth: usize) -> Result<()> {
        let top_level = self.constant_routes.iter().chain(self.async_routes.iter());
        check_siblings(top_level, "/", 1, max_depth)
    }

    /// Validate the table and build an empty access state over it
    pub fn into_access_state(self, config: AccessConfig) -> Result<AccessState> {
        if let Err(e) = self.validate(config.max_depth) {
            warn!(error = %e, "Rejected route table");
            return Err(e);
        }

        Ok(AccessState::new(
            self.constant_routes,
            self.async_routes,
            config,
        ))
    }
}

fn check_siblings<'a>(
    routes: impl Iterator<Item = &'a RouteNode>,
    parent: &str,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    let mut seen = HashSet::new();

    for route in routes {
        if route.path.is_empty() {
            return Err(RouteError::InvalidInput(format!(
                "Route under '{}' has an empty path",
                parent
            )));
        }

        if depth > max_depth {
            return Err(RouteError::DepthExceeded {
                path: route.path.clone(),
                max_depth,
            });
        }

        if !seen.insert(route.path.as_str()) {
            return Err(RouteError::DuplicatePath {
                parent: parent.to_string(),
                path: route.path.clone(),
            });
        }

        if let Some(children) = route.children.as_deref() {
            check_siblings(children.iter(), &route.path, depth + 1, max_depth)?;
        }
    }

    Ok(())
}
