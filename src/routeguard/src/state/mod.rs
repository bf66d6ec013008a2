//! Access state container
//!
//! Holds the routes the current principal may reach and republishes them
//! after every role change.
//!
//! # Architecture
//!
//! ```text
//! RoleSet → generate ─┬─ super role ─→ candidate tree ─┐
//!                     └─ otherwise ──→ filter_routes ──┴→ commit → authorized
//!                                                                  effective = base ++ authorized
//! ```
//!
//! Mutation goes through `&mut self`, so a single owner serializes
//! `commit` and `generate`. Callers sharing the state across tasks wrap it
//! in their own lock.


use crate::config::AccessConfig;
use crate::filter::filter_routes;
use crate::metrics::AccessMetrics;
use crate::types::{RoleSet, RouteNode};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Lifecycle phase of an access state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessPhase {
    /// Nothing committed yet
    Empty,

    /// At least one result committed
    Populated,
}

/// Owned copy of a committed access result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessSnapshot {
    /// Number of commits so far (0 while empty)
    pub generation: u64,

    /// Candidate routes the principal may reach
    pub authorized: Vec<RouteNode>,

    /// Base routes followed by the authorized routes
    pub effective: Vec<RouteNode>,
}

/// Access state for one principal session
///
/// Constructed once with the base and candidate trees, then recomputed on
/// every login or role change. Both trees are shared read-only.
#[derive(Debug, Clone)]
pub struct AccessState {
    /// Routes every principal may reach
    base: Arc<[RouteNode]>,

    /// Role-gated routes
    candidate: Arc<[RouteNode]>,

    config: AccessConfig,

    /// Last committed candidate subset
    authorized: Vec<RouteNode>,

    /// `base ++ authorized`
    effective: Vec<RouteNode>,

    generation: u64,

    metrics: AccessMetrics,
}

impl AccessState {
    /// Create an empty access state over the given trees
    pub fn new(
        base: impl Into<Arc<[RouteNode]>>,
        candidate: impl Into<Arc<[RouteNode]>>,
        config: AccessConfig,
    ) -> Self {
        Self {
            base: base.into(),
            candidate: candidate.into(),
            config,
            authorized: Vec::new(),
            effective: Vec::new(),
            generation: 0,
            metrics: AccessMetrics::default(),
        }
    }

    /// Replace the authorized routes
    ///
    /// Sets `authorized` and recomputes `effective` as the base routes
    /// followed by `authorized`. No validation is performed.
    pub fn commit(&mut self, authorized: Vec<RouteNode>) {
        let mut effective = Vec::with_capacity(self.base.len() + authorized.len());
        effective.extend_from_slice(&self.base);
        effective.extend(authorized.iter().cloned());

        self.authorized = authorized;
        self.effective = effective;
        self.generation += 1;
        self.metrics
            .record_commit(self.authorized.len(), self.effective.len());

        info!(
            generation = self.generation,
            authorized = self.authorized.len(),
            effective = self.effective.len(),
            "Committed route access"
        );
    }

    /// Compute the routes `roles` may reach and commit them
    ///
    /// A role set holding the configured super role receives the candidate
    /// tree unmodified. Resolves with the authorized subset; read
    /// [`effective`](Self::effective) for the base routes as well.
    pub async fn generate(&mut self, roles: &RoleSet) -> Vec<RouteNode> {
        let bypass = roles.contains(&self.config.super_role);

        let authorized = if bypass {
            self.candidate.to_vec()
        } else {
            filter_routes(&self.candidate, roles)
        };

        self.metrics.record_generate(bypass);
        self.commit(authorized.clone());

        tokio::task::yield_now().await;

        authorized
    }

    /// Last committed candidate subset
    pub fn authorized(&self) -> &[RouteNode] {
        &self.authorized
    }

    /// Base routes followed by the last committed candidate subset
    pub fn effective(&self) -> &[RouteNode] {
        &self.effective
    }

    pub fn base_routes(&self) -> &[RouteNode] {
        &self.base
    }

    pub fn candidate_routes(&self) -> &[RouteNode] {
        &self.candidate
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn phase(&self) -> AccessPhase {
        if self.generation == 0 {
            AccessPhase::Empty
        } else {
            AccessPhase::Populated
        }
    }

    /// Number of commits so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn metrics(&self) -> &AccessMetrics {
        &self.metrics
    }

    /// Owned copy of the committed state
    pub fn snapshot(&self) -> AccessSnapshot {
        AccessSnapshot {
            generation: self.generation,
            authorized: self.authorized.clone(),
            effective: self.effective.clone(),
        }
    }
}
