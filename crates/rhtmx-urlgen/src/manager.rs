use tracing::debug;

use crate::{Route, RouteConfig, RouteTable, RouteValues, UrlGenError};

/// Entry point for URL generation
///
/// Owns the route table and the base URL every generated URL is prefixed
/// with. Built once and passed around by reference; there is no API to change
/// the table afterwards.
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::{RouteManager, RouteTable, RouteTemplate, RouteValues};
///
/// let manager = RouteManager::new(
///     "/",
///     RouteTable::from_templates(vec![
///         RouteTemplate::new("cache/{action}/{id}").with_default("controller", "Cache"),
///     ]),
/// );
///
/// let url = manager.route(&RouteValues::from([("action", "Flush"), ("id", "42")])).unwrap();
/// assert_eq!(url, "/cache/Flush/42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteManager {
    base_url: String,
    table: RouteTable,
}

impl RouteManager {
    pub fn new(base_url: impl Into<String>, table: RouteTable) -> Self {
        Self {
            base_url: base_url.into(),
            table,
        }
    }

    /// Builds a manager from a loaded configuration
    pub fn from_config(config: RouteConfig) -> Self {
        Self::new(config.base_url, RouteTable::from_templates(config.routes))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    /// URL for a controller action
    ///
    /// Sets `controller` and `action` on the given values (overwriting any
    /// existing entries with those exact keys), then resolves them with
    /// [`RouteManager::route`].
    ///
    /// ```
    /// use rhtmx_urlgen::{RouteManager, RouteTable, RouteTemplate, RouteValues};
    ///
    /// let manager = RouteManager::new(
    ///     "/",
    ///     RouteTable::from_templates(vec![RouteTemplate::new("{controller}/{action}")]),
    /// );
    /// assert_eq!(manager.action("Account", "Login", None).unwrap(), "/Account/Login");
    /// ```
    pub fn action(
        &self,
        controller: &str,
        action: &str,
        route_values: Option<RouteValues>,
    ) -> Result<String, UrlGenError> {
        let values = route_values
            .unwrap_or_default()
            .with("controller", controller)
            .with("action", action);

        self.route(&values)
    }

    /// URL for arbitrary route values
    ///
    /// Routes are tried in table order and the first one that builds wins.
    /// Fails with [`UrlGenError::NoRouteMatched`] when none does.
    pub fn route(&self, route_values: &RouteValues) -> Result<String, UrlGenError> {
        match self.table.first_match(route_values) {
            Some((index, url)) => {
                debug!(route = index, pattern = %self.table.routes()[index].url(), %url, "route matched");
                Ok(format!("{}{}", self.base_url, url))
            }
            None => {
                debug!(values = %route_values, "no route matched");
                Err(UrlGenError::NoRouteMatched {
                    values: route_values.clone(),
                })
            }
        }
    }

    /// Compiles every route's constraints up front
    ///
    /// Routes otherwise compile constraints on first use and treat an invalid
    /// pattern as a non-match; this surfaces the first invalid pattern instead.
    pub fn precompile(&self) -> Result<(), UrlGenError> {
        self.table
            .iter()
            .try_for_each(|route| route.compiled_constraints().map(|_| ()))
    }
}
