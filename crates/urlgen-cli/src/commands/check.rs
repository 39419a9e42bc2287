use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load_manager;

pub fn execute(config: &Path) -> Result<()> {
    let manager = load_manager(config)?;

    println!("{}", "Checking route configuration...".green().bold());
    manager.precompile()?;

    let constrained = manager
        .routes()
        .iter()
        .filter(|r| !r.template().constraints.is_empty())
        .count();

    println!(
        "  {} {} routes, {} with constraints",
        "✓".green(),
        manager.routes().len(),
        constrained
    );
    Ok(())
}
