//! Route rules: an endpoint name bound to a templated path

pub mod pattern;

use pattern::{split_rule, to_axum_path, SplitRule};

/// A single registered rule, e.g. `show_item` → `/item/<int:id>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    endpoint: String,
    rule: String,
}

impl Rule {
    pub fn new(endpoint: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            rule: rule.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The templated path as registered
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Parameter names in the order they appear
    ///
    /// ```
    /// use jsglue_router::Rule;
    ///
    /// let rule = Rule::new("post", "/blog/<int:year>/<slug>");
    /// assert_eq!(rule.arguments(), vec!["year", "slug"]);
    /// ```
    pub fn arguments(&self) -> Vec<String> {
        self.split().arguments
    }

    /// Literal fragments and parameter names, positionally aligned
    pub fn split(&self) -> SplitRule {
        split_rule(&self.rule)
    }

    /// The same rule in axum's `:name` / `*name` syntax
    pub fn axum_path(&self) -> String {
        to_axum_path(&self.rule)
    }
}
