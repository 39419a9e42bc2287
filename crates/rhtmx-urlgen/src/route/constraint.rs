/// Regex constraints on route values
///
/// Constraint patterns are compiled as `^(<pattern>)`: a value passes when a
/// prefix of it matches, not necessarily the whole string.

use std::collections::HashMap;

use regex::Regex;

use crate::RouteValues;

/// A compiled constraint for one parameter
#[derive(Debug, Clone)]
pub struct ParameterConstraint {
    /// Lower-cased parameter name
    pub param: String,
    /// Pattern as written in the route configuration
    pub pattern: String,
    regex: Regex,
}

impl ParameterConstraint {
    /// Compiles `^(<pattern>)` for `param`
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urlgen::route::ParameterConstraint;
    ///
    /// let c = ParameterConstraint::compile("id", "[0-9]+").unwrap();
    /// assert!(c.is_match("123"));
    /// assert!(c.is_match("123extra"));
    /// assert!(!c.is_match("abc"));
    /// ```
    pub fn compile(param: &str, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^({})", pattern))?;
        Ok(Self {
            param: param.to_lowercase(),
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Every compiled constraint of one route
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    constraints: Vec<ParameterConstraint>,
}

impl ConstraintSet {
    /// Compiles every `param → pattern` entry, stopping at the first invalid pattern
    ///
    /// Entries are compiled in parameter-name order so the reported error is stable.
    pub fn compile(raw: &HashMap<String, String>) -> Result<Self, (String, regex::Error)> {
        let mut entries: Vec<(&String, &String)> = raw.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        entries
            .into_iter()
            .map(|(param, pattern)| {
                ParameterConstraint::compile(param, pattern).map_err(|e| (param.clone(), e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|constraints| Self { constraints })
    }

    /// Name of the first parameter whose final value fails its constraint
    ///
    /// A parameter with no value at all never satisfies its constraint.
    pub fn first_violation<'a>(&'a self, final_values: &RouteValues) -> Option<&'a str> {
        self.constraints
            .iter()
            .find(|c| {
                final_values
                    .get(&c.param)
                    .map_or(true, |v| !c.is_match(&v.as_string()))
            })
            .map(|c| c.param.as_str())
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
