use anyhow::{bail, Result};
use rhtmx_urlgen::RouteValues;

/// Parses `key=value` arguments into route values, keeping argument order
///
/// Only the first `=` splits, so values may contain `=` themselves.
pub fn parse_route_values(args: &[String]) -> Result<RouteValues> {
    let mut values = RouteValues::new();

    for arg in args {
        match arg.split_once('=') {
            Some((key, _)) if key.is_empty() => bail!("Missing key in route value `{}`", arg),
            Some((key, value)) => {
                values.insert(key, value);
            }
            None => bail!("Route value `{}` must be written as key=value", arg),
        }
    }

    Ok(values)
}
