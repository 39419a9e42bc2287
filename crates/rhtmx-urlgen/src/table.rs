use crate::{Route, RouteTemplate, RouteValues};

/// Ordered, immutable collection of routes
///
/// Order is significant: lookups return the first route that can build a URL.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Compiles templates into routes, keeping their order
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urlgen::{RouteTable, RouteTemplate, RouteValues};
    ///
    /// let table = RouteTable::from_templates(vec![
    ///     RouteTemplate::new("cache/{action}/{id}"),
    ///     RouteTemplate::new("cache/{action}"),
    /// ]);
    ///
    /// let (index, url) = table.first_match(&RouteValues::from([("action", "Flush")])).unwrap();
    /// assert_eq!(index, 1);
    /// assert_eq!(url, "cache/Flush");
    /// ```
    pub fn from_templates<I>(templates: I) -> Self
    where
        I: IntoIterator<Item = RouteTemplate>,
    {
        Self {
            routes: templates.into_iter().map(Route::new).collect(),
        }
    }

    /// Index and URL of the first route able to build from `values`
    pub fn first_match(&self, values: &RouteValues) -> Option<(usize, String)> {
        self.routes
            .iter()
            .enumerate()
            .find_map(|(i, route)| route.build(values).map(|url| (i, url)))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<RouteTemplate> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteTemplate>>(iter: I) -> Self {
        Self::from_templates(iter)
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
