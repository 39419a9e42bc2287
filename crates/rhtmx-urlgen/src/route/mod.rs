/// Route module for outgoing URL generation
///
/// A [`Route`] wraps one [`RouteTemplate`] and decides whether it can render a
/// given set of route values:
/// - `pattern`: tokenizing of `{name}` URL patterns
/// - `constraint`: prefix-anchored regex constraints, compiled on first use

pub mod constraint;
pub mod pattern;

use std::collections::HashSet;

use once_cell::sync::OnceCell;
use tracing::{trace, warn};

use crate::path::{encode_component, query_string, trim_optional_segments};
use crate::{RouteTemplate, RouteValues, UrlGenError};

pub use constraint::{ConstraintSet, ParameterConstraint};
pub use pattern::{placeholder_names, tokenize, UrlToken};

/// Keys that never end up in the query string, whatever the route
const ALWAYS_PROCESSED: [&str; 2] = ["controller", "action"];

/// One route template, tokenized once at construction
///
/// Immutable after construction apart from the constraint cache, which is
/// filled on the first [`Route::build`] call. Filling it is idempotent, so
/// concurrent first use at worst compiles the constraints twice.
#[derive(Debug, Clone)]
pub struct Route {
    template: RouteTemplate,
    tokens: Vec<UrlToken>,
    params: Vec<String>,
    constraints: OnceCell<ConstraintSet>,
}

impl Route {
    /// Creates a route from a template
    ///
    /// Parameter names in defaults, constraints and optional markers are
    /// lower-cased here, so templates built by hand behave like loaded ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urlgen::{Route, RouteTemplate};
    ///
    /// let route = Route::new(RouteTemplate::new("{language}/agency/{agencyPrettyName}"));
    /// assert_eq!(route.params(), ["language", "agencyprettyname"]);
    /// ```
    pub fn new(template: RouteTemplate) -> Self {
        let template = template.normalized();
        let tokens = tokenize(&template.url);
        let params = placeholder_names(&tokens);

        Self {
            template,
            tokens,
            params,
            constraints: OnceCell::new(),
        }
    }

    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    /// URL pattern as configured
    pub fn url(&self) -> &str {
        &self.template.url
    }

    /// Placeholder names in declaration order (lower-cased)
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn tokens(&self) -> &[UrlToken] {
        &self.tokens
    }

    pub fn is_optional(&self, param: &str) -> bool {
        self.template.optional.iter().any(|o| o == param)
    }

    /// Compiled constraints, compiling them on first call
    pub fn compiled_constraints(&self) -> Result<&ConstraintSet, UrlGenError> {
        self.constraints
            .get_or_try_init(|| ConstraintSet::compile(&self.template.constraints))
            .map_err(|(param, source)| UrlGenError::InvalidConstraint {
                url: self.template.url.clone(),
                param,
                source,
            })
    }

    /// Builds a URL from `route_values`, or None when this route can't produce one
    ///
    /// Values are matched against the template case-insensitively. Values the
    /// URL doesn't consume are appended as query parameters, in the order the
    /// caller supplied them.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urlgen::{Route, RouteTemplate, RouteValues};
    ///
    /// let route = Route::new(
    ///     RouteTemplate::new("{language}/search")
    ///         .with_default("controller", "SearchEngine")
    ///         .with_default("action", "Search"),
    /// );
    ///
    /// let values = RouteValues::new().with("language", "en").with("sort", "price");
    /// assert_eq!(route.build(&values), Some("en/search?sort=price".to_string()));
    ///
    /// // Required placeholder missing
    /// assert_eq!(route.build(&RouteValues::new()), None);
    /// ```
    pub fn build(&self, route_values: &RouteValues) -> Option<String> {
        let lowercase_values = route_values.to_lowercase_keys();
        let final_values = self.template.defaults.merged_with(&lowercase_values);
        let mut processed: HashSet<String> =
            ALWAYS_PROCESSED.iter().map(|k| k.to_string()).collect();

        if !self.area_matches(&lowercase_values)
            || !self.check_constraints(&final_values)
            || !self.check_non_default_values(&final_values, &mut processed)
        {
            return None;
        }

        let merged = self.merge(&final_values, &mut processed)?;
        let has_query = merged.contains('?');

        let extras = route_values
            .iter()
            .filter(|(key, _)| !processed.contains(&key.to_lowercase()));

        Some(format!(
            "{}{}",
            trim_optional_segments(&merged),
            query_string(extras, has_query)
        ))
    }

    /// A non-empty `area` default pins the route to that area
    fn area_matches(&self, lowercase_values: &RouteValues) -> bool {
        let area = match self.template.defaults.get("area") {
            Some(area) if area.is_truthy() => area.as_string().to_lowercase(),
            _ => return true,
        };

        let requested = lowercase_values
            .get("area")
            .map(|v| v.as_string().to_lowercase())
            .unwrap_or_default();

        if area != requested {
            trace!(url = %self.template.url, %area, %requested, "route rejected: area mismatch");
            return false;
        }
        true
    }

    fn check_constraints(&self, final_values: &RouteValues) -> bool {
        if self.template.constraints.is_empty() {
            return true;
        }

        let constraints = match self.compiled_constraints() {
            Ok(constraints) => constraints,
            Err(e) => {
                warn!("{}", e);
                return false;
            }
        };

        match constraints.first_violation(final_values) {
            Some(param) => {
                trace!(url = %self.template.url, param, "route rejected: constraint failed");
                false
            }
            None => true,
        }
    }

    /// Every default must either keep its value or have a placeholder to carry
    /// the override. Defaults are never repeated in the query string.
    fn check_non_default_values(
        &self,
        final_values: &RouteValues,
        processed: &mut HashSet<String>,
    ) -> bool {
        for (key, default) in self.template.defaults.iter() {
            let overridden = final_values
                .get(key)
                .map_or(false, |value| !value.eq_ignore_case(default));

            if overridden && !self.params.iter().any(|p| p == key) {
                trace!(url = %self.template.url, key, "route rejected: default overridden without placeholder");
                return false;
            }
            processed.insert(key.to_string());
        }
        true
    }

    /// Substitutes placeholders, leaving unfilled optional ones in place
    fn merge(&self, final_values: &RouteValues, processed: &mut HashSet<String>) -> Option<String> {
        let mut url = String::with_capacity(self.template.url.len());

        for token in &self.tokens {
            match token {
                UrlToken::Literal(text) => url.push_str(text),
                UrlToken::Placeholder { name, raw } => {
                    match final_values.get(name) {
                        Some(value) => url.push_str(&encode_component(&value.as_string())),
                        None if self.is_optional(name) => url.push_str(raw),
                        None => {
                            trace!(url = %self.template.url, param = %name, "route rejected: missing parameter");
                            return None;
                        }
                    }
                    processed.insert(name.clone());
                }
            }
        }

        Some(url)
    }
}
