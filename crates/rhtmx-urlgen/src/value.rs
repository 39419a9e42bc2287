/// Route values: the caller-supplied parameters that drive URL generation
///
/// `RouteValues` is an insertion-ordered map. Iteration order decides the
/// order of query-string parameters, so it has to be deterministic.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A single route value (string, integer, float or boolean)
///
/// Comparisons and URL rendering always go through the string form,
/// see [`RouteValue::as_string`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl RouteValue {
    /// String form used for comparisons, substitution and the query string
    ///
    /// Floats use Rust's `Display`, which never switches to exponent notation:
    /// `1e21` renders as `1000000000000000000000`, not `1e+21`.
    ///
    /// ```
    /// use rhtmx_urlgen::RouteValue;
    ///
    /// assert_eq!(RouteValue::from(10).as_string(), "10");
    /// assert_eq!(RouteValue::from(true).as_string(), "true");
    /// assert_eq!(RouteValue::from(2.5).as_string(), "2.5");
    /// ```
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Returns true for values that count as "set" when used as a guard
    /// (non-empty strings, non-zero numbers, `true`)
    pub fn is_truthy(&self) -> bool {
        match self {
            RouteValue::Bool(b) => *b,
            RouteValue::Int(n) => *n != 0,
            RouteValue::Float(f) => *f != 0.0 && !f.is_nan(),
            RouteValue::String(s) => !s.is_empty(),
        }
    }

    /// Case-insensitive comparison of the string forms
    pub fn eq_ignore_case(&self, other: &RouteValue) -> bool {
        self.as_string().to_lowercase() == other.as_string().to_lowercase()
    }
}

impl fmt::Display for RouteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteValue::Bool(b) => write!(f, "{}", b),
            RouteValue::Int(n) => write!(f, "{}", n),
            RouteValue::Float(x) => write!(f, "{}", x),
            RouteValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RouteValue {
    fn from(value: &str) -> Self {
        RouteValue::String(value.to_string())
    }
}

impl From<String> for RouteValue {
    fn from(value: String) -> Self {
        RouteValue::String(value)
    }
}

impl From<&String> for RouteValue {
    fn from(value: &String) -> Self {
        RouteValue::String(value.clone())
    }
}

impl From<bool> for RouteValue {
    fn from(value: bool) -> Self {
        RouteValue::Bool(value)
    }
}

impl From<i64> for RouteValue {
    fn from(value: i64) -> Self {
        RouteValue::Int(value)
    }
}

impl From<i32> for RouteValue {
    fn from(value: i32) -> Self {
        RouteValue::Int(value as i64)
    }
}

impl From<u32> for RouteValue {
    fn from(value: u32) -> Self {
        RouteValue::Int(value as i64)
    }
}

impl From<f64> for RouteValue {
    fn from(value: f64) -> Self {
        RouteValue::Float(value)
    }
}

/// Insertion-ordered map of route values
///
/// Keys keep the caller's casing. Inserting a key that already exists
/// (exact match) replaces its value in place.
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::RouteValues;
///
/// let values = RouteValues::new()
///     .with("language", "en")
///     .with("sort", "price")
///     .with("page", 2);
///
/// let keys: Vec<&str> = values.keys().collect();
/// assert_eq!(keys, vec!["language", "sort", "page"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteValues {
    entries: Vec<(String, RouteValue)>,
}

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RouteValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RouteValue>) -> Option<RouteValue> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<&RouteValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy with every key lower-cased
    ///
    /// When two keys collapse onto the same lower-cased key, the later one wins
    /// but keeps the position of the first.
    pub fn to_lowercase_keys(&self) -> RouteValues {
        self.iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect()
    }

    /// Right-biased shallow merge: `overrides` replaces matching keys of `self`,
    /// keys unique to either side are kept
    pub fn merged_with(&self, overrides: &RouteValues) -> RouteValues {
        let mut result = self.clone();
        for (k, v) in overrides.iter() {
            result.insert(k, v.clone());
        }
        result
    }
}

impl fmt::Display for RouteValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", k, v.as_string())?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for RouteValues
where
    K: Into<String>,
    V: Into<RouteValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = RouteValues::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RouteValues
where
    K: Into<String>,
    V: Into<RouteValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for RouteValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// Deserialized entry by entry so document order survives.
impl<'de> Deserialize<'de> for RouteValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValuesVisitor;

        impl<'de> Visitor<'de> for ValuesVisitor {
            type Value = RouteValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of route values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut values = RouteValues::new();
                while let Some((key, value)) = map.next_entry::<String, RouteValue>()? {
                    values.insert(key, value);
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(ValuesVisitor)
    }
}
