use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rhtmx_urlgen::Route;

use super::load_manager;

pub fn execute(config: &Path) -> Result<()> {
    let manager = load_manager(config)?;

    println!("{} {}", "Base URL:".bold(), manager.base_url().cyan());
    println!();

    for (index, route) in manager.routes().iter().enumerate() {
        println!("{:>4}  {}", index, describe(route));
    }

    println!();
    println!("{} routes", manager.routes().len());
    Ok(())
}

/// One-line summary: pattern, then defaults, constraints and optional markers
fn describe(route: &Route) -> String {
    let template = route.template();
    let mut line = route.url().green().to_string();

    if !template.defaults.is_empty() {
        line.push_str(&format!("  defaults={}", template.defaults));
    }

    if !template.constraints.is_empty() {
        let mut constraints: Vec<String> = template
            .constraints
            .iter()
            .map(|(param, pattern)| format!("{}={}", param, pattern))
            .collect();
        constraints.sort();
        line.push_str(&format!("  constraints=[{}]", constraints.join(", ")));
    }

    if !template.optional.is_empty() {
        line.push_str(&format!("  optional=[{}]", template.optional.join(", ")));
    }

    line
}
