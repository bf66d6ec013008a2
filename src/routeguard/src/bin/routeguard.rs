//! # routeguard
//!
//! Resolves the routes a role set may reach from a JSON route table and
//! prints the committed access snapshot as JSON.
//!
//! ## Usage
//!
//! ```text
//! routeguard <routes.json> [role ...]
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `ROUTEGUARD_SUPER_ROLE` - Role that bypasses filtering (default: admin)
//! - `ROUTEGUARD_MAX_DEPTH` - Deepest allowed route nesting (default: 32)
//! - `RUST_LOG` - Log level (default: info)

use anyhow::Context;
use routeguard::{AccessConfig, RoleSet, RouteTable};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let table_path = args
        .next()
        .context("usage: routeguard <routes.json> [role ...]")?;
    let roles: RoleSet = args.collect();

    info!("Starting routeguard v{}", routeguard::VERSION);

    let config = AccessConfig::from_env().context("invalid configuration")?;
    let table = RouteTable::from_path(&table_path)
        .with_context(|| format!("failed to load route table from {}", table_path))?;
    let mut state = table
        .into_access_state(config)
        .context("invalid route table")?;

    let authorized = state.generate(&roles).await;
    info!(
        roles = roles.len(),
        authorized = authorized.len(),
        effective = state.effective().len(),
        "Resolved route access"
    );

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);

    Ok(())
}
