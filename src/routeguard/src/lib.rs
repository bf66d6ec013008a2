//! # routeguard
//!
//! Role-based access filtering for navigation route trees.
//!
//! ## Features
//!
//! - **Recursive filtering** of a route tree against a principal's role set
//! - **Always-visible base routes** merged ahead of the authorized subset
//! - **Owned access state** with a single commit point and an async generate step
//! - **JSON route tables** with structural validation at load time
//!
//! ## Example
//!
//! ```rust
//! use routeguard::{AccessConfig, AccessState, RoleSet, RouteNode};
//!
//! # async fn example() {
//! let base = vec![RouteNode::new("/home")];
//! let candidate = vec![RouteNode::new("/settings").with_roles(["admin"])];
//!
//! let mut state = AccessState::new(base, candidate, AccessConfig::default());
//! let authorized = state.generate(&RoleSet::from_iter(["user"])).await;
//!
//! assert!(authorized.is_empty());
//! assert_eq!(state.effective().len(), 1);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod state;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use config::AccessConfig;
pub use error::{Result, RouteError};
pub use filter::{filter_routes, has_permission};
pub use metrics::AccessMetrics;
pub use state::{AccessPhase, AccessSnapshot, AccessState};
pub use table::RouteTable;
pub use types::{RoleId, RoleSet, RouteMeta, RouteNode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
