use thiserror::Error;

use crate::RouteValues;

/// Errors surfaced by the URL generator
///
/// Per-route rejections are not errors; a route that can't build a URL just
/// yields `None` and the next route is tried.
#[derive(Debug, Error)]
pub enum UrlGenError {
    /// Every route in the table rejected the values
    #[error("No route could be matched to route values: {values}")]
    NoRouteMatched { values: RouteValues },

    /// A constraint pattern isn't a valid regex
    #[error("Invalid constraint for `{param}` on route `{url}`: {source}")]
    InvalidConstraint {
        url: String,
        param: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read route configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON route configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML route configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("No `RouteManager(...)` configuration found in script")]
    ScriptNotFound,

    #[error("Unsupported route configuration format: `{0}` (expected json, toml or js)")]
    UnsupportedFormat(String),
}
