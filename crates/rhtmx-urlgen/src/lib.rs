//! # RHTMX URL Generator
//!
//! Builds outgoing URLs from controller/action route values using an ordered
//! table of route templates:
//! - Placeholders (`{language}/search/{id}`)
//! - Default values, which also act as guards when the URL has no slot for them
//! - Optional placeholders (unfilled segments are trimmed)
//! - Regex constraints (prefix-anchored, `^(pattern)`)
//! - Query-string fallback for values the template doesn't consume
//!
//! The first template able to build a URL wins, so order specific templates
//! before catch-all ones.
//!
//! ## Example
//!
//! ```
//! use rhtmx_urlgen::{RouteConfig, RouteManager, RouteValues};
//!
//! let config = RouteConfig::from_json(r#"{
//!     "baseUrl": "/",
//!     "routes": [
//!         {"url": "{language}/search",
//!          "defaults": {"controller": "SearchEngine", "action": "Search"}}
//!     ]
//! }"#).unwrap();
//!
//! let manager = RouteManager::from_config(config);
//! let url = manager
//!     .route(&RouteValues::from([("language", "en"), ("sort", "price")]))
//!     .unwrap();
//! assert_eq!(url, "/en/search?sort=price");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
mod manager;
pub mod path;
pub mod route;
mod table;
mod value;

pub use config::{RouteConfig, RouteTemplate};
pub use error::UrlGenError;
pub use manager::RouteManager;
pub use route::Route;
pub use table::RouteTable;
pub use value::{RouteValue, RouteValues};

/// Crate version, reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
