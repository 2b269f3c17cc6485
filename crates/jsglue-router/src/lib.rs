//! # jsglue Router
//!
//! Rule registry shared by request dispatch and URL reversal.
//!
//! Rules use angle-bracket placeholders:
//! - Plain parameters (`/users/<id>`)
//! - Converter-qualified parameters (`/users/<int:id>`)
//! - Path parameters that span segments (`/static/<path:file>`)
//!
//! The same rule string is registered with axum (after translation to
//! `:name` / `*name`) and recorded in a [`UrlMap`], which later feeds the
//! route table embedded in the generated client script.
//!
//! ## Example
//!
//! ```
//! use jsglue_router::{Rule, UrlMap};
//!
//! let mut map = UrlMap::new();
//! map.add_rule(Rule::new("index", "/"));
//! map.add_rule(Rule::new("show_item", "/item/<int:id>"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.rules_for("show_item").next().unwrap().axum_path(), "/item/:id");
//! ```

use axum::routing::MethodRouter;
use axum::Router;

// ============================================================================
// Module Declarations
// ============================================================================

mod registry;
pub mod rule;

pub use registry::RouteRegistry;
pub use rule::pattern::{parse_placeholder, placeholders, split_rule, Placeholder, SplitRule};
pub use rule::Rule;

// ============================================================================
// UrlMap
// ============================================================================

/// Ordered collection of rules, in registration order
#[derive(Debug, Clone, Default)]
pub struct UrlMap {
    rules: Vec<Rule>,
}

impl UrlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule
    pub fn add_rule(&mut self, rule: Rule) {
        tracing::debug!(endpoint = rule.endpoint(), rule = rule.rule(), "rule added");
        self.rules.push(rule);
    }

    /// Builder-style variant of [`UrlMap::add_rule`]
    pub fn with_rule(mut self, endpoint: impl Into<String>, rule: impl Into<String>) -> Self {
        self.add_rule(Rule::new(endpoint, rule));
        self
    }

    /// Registers `rule` on an axum router and records it under `endpoint`
    ///
    /// ```
    /// use axum::{routing::get, Router};
    /// use jsglue_router::UrlMap;
    ///
    /// let mut map = UrlMap::new();
    /// let app: Router = map.register(Router::new(), "show_item", "/item/<int:id>", get(|| async { "item" }));
    /// assert!(map.contains("show_item"));
    /// ```
    pub fn register<S>(
        &mut self,
        router: Router<S>,
        endpoint: impl Into<String>,
        rule: impl Into<String>,
        method_router: MethodRouter<S>,
    ) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let rule = Rule::new(endpoint, rule);
        let router = router.route(&rule.axum_path(), method_router);
        self.add_rule(rule);
        router
    }

    /// Iterates over rules in registration order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// All rules registered under `endpoint`
    pub fn rules_for<'a>(&'a self, endpoint: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |r| r.endpoint() == endpoint)
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        self.rules.iter().any(|r| r.endpoint() == endpoint)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for UrlMap {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
