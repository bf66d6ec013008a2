//! Access configuration
//!
//! Environment variables:
//! - `ROUTEGUARD_SUPER_ROLE` - Role that bypasses filtering (default: admin)
//! - `ROUTEGUARD_MAX_DEPTH` - Deepest allowed route nesting (default: 32)

use crate::error::{Result, RouteError};
use crate::types::RoleId;

/// Default role that sees every candidate route
pub const DEFAULT_SUPER_ROLE: &str = "admin";

/// Default maximum route nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Access configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    /// Role that receives the whole candidate tree without filtering
    pub super_role: RoleId,

    /// Deepest route nesting accepted when loading a route table
    pub max_depth: usize,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            super_role: DEFAULT_SUPER_ROLE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AccessConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(role) = lookup("ROUTEGUARD_SUPER_ROLE") {
            let role = role.trim();
            if role.is_empty() {
                return Err(RouteError::Config(
                    "ROUTEGUARD_SUPER_ROLE cannot be empty".to_string(),
                ));
            }
            config.super_role = role.to_string();
        }

        if let Some(depth) = lookup("ROUTEGUARD_MAX_DEPTH") {
            config.max_depth = depth.trim().parse().map_err(|_| {
                RouteError::Config(format!(
                    "ROUTEGUARD_MAX_DEPTH must be a positive integer, got '{}'",
                    depth
                ))
            })?;
            if config.max_depth == 0 {
                return Err(RouteError::Config(
                    "ROUTEGUARD_MAX_DEPTH must be at least 1".to_string(),
                ));
            }
        }

        Ok(config)
    }

    /// Set the super role
    pub fn with_super_role(mut self, role: impl Into<RoleId>) -> Self {
        self.super_role = role.into();
        self
    }

    /// Set the maximum route depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AccessConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AccessConfig::default());
        assert_eq!(config.super_role, "admin");
        assert_eq!(config.max_depth, 32);
    }

    #[test]
    fn test_overrides() {
        let config = AccessConfig::from_lookup(lookup(&[
            ("ROUTEGUARD_SUPER_ROLE", "root"),
            ("ROUTEGUARD_MAX_DEPTH", " 8 "),
        ]))
        .unwrap();

        assert_eq!(config.super_role, "root");
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AccessConfig::from_lookup(lookup(&[("ROUTEGUARD_MAX_DEPTH", "deep")])),
            Err(RouteError::Config(_))
        ));
        assert!(matches!(
            AccessConfig::from_lookup(lookup(&[("ROUTEGUARD_MAX_DEPTH", "0")])),
            Err(RouteError::Config(_))
        ));
        assert!(matches!(
            AccessConfig::from_lookup(lookup(&[("ROUTEGUARD_SUPER_ROLE", "  ")])),
            Err(RouteError::Config(_))
        ));
    }
}
