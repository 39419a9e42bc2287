/// Route configuration: the base URL plus the ordered list of route templates
///
/// Loaded once at startup from JSON, TOML, or the bootstrap script that
/// constructs the client-side route manager.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{RouteValues, UrlGenError};

/// Declarative description of one URL shape
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::RouteTemplate;
///
/// let template = RouteTemplate::new("cache/{action}/{id}")
///     .with_default("controller", "Cache")
///     .with_constraint("id", "[0-9]+");
///
/// assert_eq!(template.url, "cache/{action}/{id}");
/// assert!(template.defaults.contains_key("controller"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTemplate {
    /// URL pattern with `{name}` placeholders
    pub url: String,
    /// Default values (keys lower-cased by [`RouteTemplate::normalized`])
    #[serde(default)]
    pub defaults: RouteValues,
    /// Regex constraints per parameter
    #[serde(default)]
    pub constraints: HashMap<String, String>,
    /// Placeholders that may be left out of the URL
    #[serde(default)]
    pub optional: Vec<String>,
}

impl RouteTemplate {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, key: &str, value: impl Into<crate::RouteValue>) -> Self {
        self.defaults.insert(key.to_lowercase(), value);
        self
    }

    pub fn with_constraint(mut self, param: &str, pattern: impl Into<String>) -> Self {
        self.constraints.insert(param.to_lowercase(), pattern.into());
        self
    }

    pub fn with_optional(mut self, param: &str) -> Self {
        self.optional.push(param.to_lowercase());
        self
    }

    /// Lower-cases default keys, constraint keys and optional names
    ///
    /// Parameter names are case-insensitive everywhere, so configuration
    /// written with mixed case behaves the same as all-lowercase.
    pub fn normalized(self) -> Self {
        Self {
            url: self.url,
            defaults: self.defaults.to_lowercase_keys(),
            constraints: self
                .constraints
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            optional: self.optional.iter().map(|o| o.to_lowercase()).collect(),
        }
    }
}

/// Base URL and ordered route templates
///
/// Template order matters: the first template able to build a URL wins, so
/// specific templates must come before catch-all ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    #[serde(default, alias = "base_url")]
    pub base_url: String,
    #[serde(default)]
    pub routes: Vec<RouteTemplate>,
}

/// Marker preceding the configuration object in a bootstrap script
const SCRIPT_MARKER: &str = "RouteManager(";

impl RouteConfig {
    /// Parses a JSON configuration
    ///
    /// ```
    /// use rhtmx_urlgen::RouteConfig;
    ///
    /// let config = RouteConfig::from_json(
    ///     r#"{"baseUrl": "/", "routes": [{"url": "about", "defaults": {"controller": "Home"}}]}"#,
    /// ).unwrap();
    /// assert_eq!(config.base_url, "/");
    /// assert_eq!(config.routes.len(), 1);
    /// ```
    pub fn from_json(content: &str) -> Result<Self, UrlGenError> {
        let config: RouteConfig = serde_json::from_str(content)?;
        Ok(config.normalized())
    }

    /// Parses a TOML configuration (`baseUrl = "/"` plus `[[routes]]` tables)
    pub fn from_toml(content: &str) -> Result<Self, UrlGenError> {
        let config: RouteConfig = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Extracts the configuration object from a bootstrap script
    ///
    /// Looks for the first `RouteManager(` call and parses the JSON object
    /// passed to it; anything after the object is ignored.
    ///
    /// ```
    /// use rhtmx_urlgen::RouteConfig;
    ///
    /// let script = r#"window.Router = new RouteJs.RouteManager({"routes":[{"url":"about"}],"baseUrl":"/"});"#;
    /// let config = RouteConfig::from_script(script).unwrap();
    /// assert_eq!(config.routes[0].url, "about");
    /// ```
    pub fn from_script(script: &str) -> Result<Self, UrlGenError> {
        let start = script
            .find(SCRIPT_MARKER)
            .map(|i| i + SCRIPT_MARKER.len())
            .ok_or(UrlGenError::ScriptNotFound)?;

        let mut stream =
            serde_json::Deserializer::from_str(&script[start..]).into_iter::<RouteConfig>();

        match stream.next() {
            Some(config) => Ok(config?.normalized()),
            None => Err(UrlGenError::ScriptNotFound),
        }
    }

    /// Loads a configuration file, picking the format from its extension
    /// (`.json`, `.toml`, `.js`)
    pub fn from_file(path: &Path) -> Result<Self, UrlGenError> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            Some("js") => Self::from_script(&content),
            other => Err(UrlGenError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    fn normalized(self) -> Self {
        Self {
            base_url: self.base_url,
            routes: self.routes.into_iter().map(RouteTemplate::normalized).collect(),
        }
    }
}
