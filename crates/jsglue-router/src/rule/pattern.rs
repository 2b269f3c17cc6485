//! Placeholder parsing for rule strings
//!
//! A rule such as `/user/<int:id>/posts/<slug>` is made of literal text and
//! `<...>` placeholder tokens. All functions here are pure.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one placeholder token, capturing its inner text.
///
/// Non-greedy so that `<a>/<b>` yields two tokens rather than one.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(.+?)>").expect("placeholder pattern is a valid regex"));

/// A single `<name>` or `<converter:name>` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Converter prefix (`int` in `<int:id>`), if any
    pub converter: Option<String>,
    /// Parameter name (`id` in `<int:id>`)
    pub name: String,
}

impl Placeholder {
    /// Whether the placeholder swallows the rest of the path (`<path:name>`)
    pub fn is_path(&self) -> bool {
        self.converter.as_deref() == Some("path")
    }
}

/// A rule split into positional literal fragments and parameter names
///
/// `literals[i]` precedes `arguments[i]`. When text follows the last
/// placeholder, `literals` carries one extra trailing element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitRule {
    pub literals: Vec<String>,
    pub arguments: Vec<String>,
}

impl SplitRule {
    /// Whether a literal fragment follows the last parameter
    pub fn has_trailing_literal(&self) -> bool {
        self.literals.len() > self.arguments.len()
    }
}

/// Parses the inside of a placeholder token (pure function)
///
/// The name is everything after the final `:`; whatever precedes it is the
/// converter.
///
/// # Examples
///
/// ```
/// use jsglue_router::rule::pattern::parse_placeholder;
///
/// let p = parse_placeholder("int:id");
/// assert_eq!(p.name, "id");
/// assert_eq!(p.converter.as_deref(), Some("int"));
///
/// let p = parse_placeholder("slug");
/// assert_eq!(p.name, "slug");
/// assert_eq!(p.converter, None);
/// ```
pub fn parse_placeholder(inner: &str) -> Placeholder {
    match inner.rsplit_once(':') {
        Some((converter, name)) => Placeholder {
            converter: Some(converter.to_string()),
            name: name.to_string(),
        },
        None => Placeholder {
            converter: None,
            name: inner.to_string(),
        },
    }
}

/// Lists the placeholders of a rule, left to right
pub fn placeholders(rule: &str) -> Vec<Placeholder> {
    PLACEHOLDER
        .captures_iter(rule)
        .filter_map(|caps| caps.get(1))
        .map(|inner| parse_placeholder(inner.as_str()))
        .collect()
}

/// Splits a rule into literal fragments and parameter names (pure function)
///
/// A leading empty fragment is kept so positions line up with the
/// parameters; a trailing empty fragment is dropped. A rule without
/// placeholders is a single literal.
///
/// # Examples
///
/// ```
/// use jsglue_router::rule::pattern::split_rule;
///
/// let split = split_rule("/item/<int:id>/edit");
/// assert_eq!(split.literals, vec!["/item/", "/edit"]);
/// assert_eq!(split.arguments, vec!["id"]);
///
/// let split = split_rule("/item/<id>");
/// assert_eq!(split.literals, vec!["/item/"]);
///
/// let split = split_rule("/about");
/// assert_eq!(split.literals, vec!["/about"]);
/// assert!(split.arguments.is_empty());
/// ```
pub fn split_rule(rule: &str) -> SplitRule {
    let mut split = SplitRule::default();
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(rule) {
        let (Some(token), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        split.literals.push(rule[cursor..token.start()].to_string());
        split.arguments.push(parse_placeholder(inner.as_str()).name);
        cursor = token.end();
    }

    let tail = &rule[cursor..];
    if !tail.is_empty() || split.arguments.is_empty() {
        split.literals.push(tail.to_string());
    }

    split
}

/// Rewrites a rule into axum's path syntax
///
/// `<name>` and `<converter:name>` become `:name`; `<path:name>` becomes the
/// wildcard `*name`.
///
/// # Examples
///
/// ```
/// use jsglue_router::rule::pattern::to_axum_path;
///
/// assert_eq!(to_axum_path("/user/<int:id>"), "/user/:id");
/// assert_eq!(to_axum_path("/static/<path:file>"), "/static/*file");
/// ```
pub fn to_axum_path(rule: &str) -> String {
    PLACEHOLDER
        .replace_all(rule, |caps: &regex::Captures| {
            let placeholder = parse_placeholder(&caps[1]);
            let sigil = if placeholder.is_path() { '*' } else { ':' };
            format!("{}{}", sigil, placeholder.name)
        })
        .into_owned()
}
