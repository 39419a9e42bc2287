//! Tokenizing of URL patterns
//!
//! Pure functional parsing of route URL patterns like `{language}/search/{id}`
//! into a sequence of typed tokens, done once when a route is constructed.
//! All functions are **pure**: same input → same output, no side effects.

/// One token of a URL pattern
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::route::pattern::{tokenize, UrlToken};
///
/// let tokens = tokenize("cache/{Action}/{id}");
/// assert_eq!(tokens[0], UrlToken::Literal("cache/".to_string()));
/// assert!(matches!(&tokens[1], UrlToken::Placeholder { name, .. } if name == "action"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum UrlToken {
    /// Literal text copied to the output unchanged
    Literal(String),
    /// `{name}` placeholder
    ///
    /// `name` is lower-cased, `raw` keeps the original text (braces included)
    /// so an unfilled placeholder renders back exactly as written.
    Placeholder { name: String, raw: String },
}

impl UrlToken {
    /// Placeholder name, if this token is one
    pub fn placeholder_name(&self) -> Option<&str> {
        match self {
            UrlToken::Placeholder { name, .. } => Some(name.as_str()),
            UrlToken::Literal(_) => None,
        }
    }
}

/// Word characters allowed in a placeholder name (`[A-Za-z0-9_]`)
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Length in bytes of a `{word}` placeholder starting at the beginning of `s`
///
/// Returns None when `s` doesn't start with a well-formed placeholder.
fn placeholder_len(s: &str) -> Option<usize> {
    let inner = s.strip_prefix('{')?;
    let name_len = inner.find(|c: char| !is_word_char(c)).unwrap_or(inner.len());

    match (name_len, inner[name_len..].starts_with('}')) {
        (0, _) | (_, false) => None,
        (n, true) => Some(n + 2),
    }
}

/// Splits a URL pattern into literal and placeholder tokens (pure function)
///
/// A placeholder is `{` followed by one or more word characters and `}`.
/// Anything else, including `{*catchall}` or a lone brace, stays literal.
/// Adjacent literal text is merged into a single token.
///
/// # Examples
///
/// ```
/// use rhtmx_urlgen::route::pattern::tokenize;
///
/// assert_eq!(tokenize("about").len(), 1);
/// assert_eq!(tokenize("{language}/HomePage").len(), 2);
/// assert_eq!(tokenize("{a}{b}").len(), 2);
/// ```
pub fn tokenize(pattern: &str) -> Vec<UrlToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        match placeholder_len(rest) {
            Some(len) => {
                if !literal.is_empty() {
                    tokens.push(UrlToken::Literal(std::mem::take(&mut literal)));
                }
                let raw = &rest[..len];
                tokens.push(UrlToken::Placeholder {
                    name: raw[1..len - 1].to_lowercase(),
                    raw: raw.to_string(),
                });
                rest = &rest[len..];
            }
            None => {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(UrlToken::Literal(literal));
    }

    tokens
}

/// Placeholder names of a pattern in declaration order (lower-cased)
///
/// Duplicates are kept: `{id}/{id}` yields `["id", "id"]`.
pub fn placeholder_names(tokens: &[UrlToken]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|t| t.placeholder_name().map(str::to_string))
        .collect()
}
