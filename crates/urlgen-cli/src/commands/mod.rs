pub mod check;
pub mod list;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use rhtmx_urlgen::{RouteConfig, RouteManager};

/// Loads the route configuration and builds the manager
pub fn load_manager(config: &Path) -> Result<RouteManager> {
    let config = RouteConfig::from_file(config)
        .with_context(|| format!("Failed to load route configuration from {}", config.display()))?;
    Ok(RouteManager::from_config(config))
}
