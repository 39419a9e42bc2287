/// URL string utilities used while building outgoing URLs
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::RouteValue;

/// Characters left unencoded in a URL component: ASCII alphanumerics and `-_.!~*'()`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URL component (path segment value, query key or value)
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is encoded as UTF-8
/// percent escapes, so a value can never introduce `/`, `?`, `&` or braces
/// into the URL.
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::path::encode_component;
///
/// assert_eq!(encode_component("San José"), "San%20Jos%C3%A9");
/// assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
/// assert_eq!(encode_component("it's (new)!*"), "it's%20(new)!*");
/// assert_eq!(encode_component("plain-value_1.0~"), "plain-value_1.0~");
/// ```
pub fn encode_component(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, COMPONENT).into()
}

/// Removes every path segment that still holds an unfilled `{...}` token
///
/// The URL is split on `/`, segments containing `{` are dropped wherever they
/// sit, and the rest is joined back with `/`. Empty segments are kept, so a
/// leading or doubled slash in the input survives.
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::path::trim_optional_segments;
///
/// assert_eq!(trim_optional_segments("en/search/{sorting}"), "en/search");
/// assert_eq!(trim_optional_segments("en/{zoom}/map"), "en/map");
/// assert_eq!(trim_optional_segments("en/HomePage"), "en/HomePage");
/// ```
pub fn trim_optional_segments(url: &str) -> Cow<'_, str> {
    if !url.contains('{') {
        return Cow::Borrowed(url);
    }

    Cow::Owned(
        url.split('/')
            .filter(|segment| !segment.contains('{'))
            .collect::<Vec<_>>()
            .join("/"),
    )
}

/// Builds the query string for unconsumed route values
///
/// Starts with `?`, or with `&` when `has_query` says the URL already carries
/// one. Returns an empty string when there is nothing to append.
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::path::query_string;
/// use rhtmx_urlgen::RouteValue;
///
/// let sort = RouteValue::from("price");
/// let page = RouteValue::from(2);
/// let extras = vec![("sort", &sort), ("page", &page)];
///
/// assert_eq!(query_string(extras.clone(), false), "?sort=price&page=2");
/// assert_eq!(query_string(extras, true), "&sort=price&page=2");
/// ```
pub fn query_string<'a, I>(extras: I, has_query: bool) -> String
where
    I: IntoIterator<Item = (&'a str, &'a RouteValue)>,
{
    let mut query = String::new();
    let mut separator = if has_query { '&' } else { '?' };

    for (key, value) in extras {
        query.push(separator);
        query.push_str(&encode_component(key));
        query.push('=');
        query.push_str(&encode_component(&value.as_string()));
        separator = '&';
    }

    query
}
