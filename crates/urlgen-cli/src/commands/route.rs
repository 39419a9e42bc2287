use std::path::Path;

use anyhow::Result;

use super::load_manager;
use crate::values::parse_route_values;

pub fn execute(config: &Path, values: &[String]) -> Result<()> {
    let manager = load_manager(config)?;
    let values = parse_route_values(values)?;

    println!("{}", manager.route(&values)?);
    Ok(())
}

pub fn execute_action(config: &Path, controller: &str, action: &str, values: &[String]) -> Result<()> {
    let manager = load_manager(config)?;
    let values = parse_route_values(values)?;

    println!("{}", manager.action(controller, action, Some(values))?);
    Ok(())
}
