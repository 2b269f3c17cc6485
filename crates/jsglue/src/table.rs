//! Route table extraction
//!
//! Turns the registered rules into the positional form embedded in the
//! generated script: `[endpoint, [literal, ...], [param, ...]]`.

use jsglue_router::{split_rule, RouteRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::args::js_string;

/// One rule in wire form
///
/// `literals[i]` precedes the value of `params[i]`; a trailing literal, when
/// present, follows the last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedRoute {
    pub endpoint: String,
    pub literals: Vec<String>,
    pub params: Vec<String>,
}

impl SerializedRoute {
    pub fn new(endpoint: impl Into<String>, rule: &str) -> Self {
        let split = split_rule(rule);
        Self {
            endpoint: endpoint.into(),
            literals: split.literals,
            params: split.arguments,
        }
    }

    /// Interleaves literals with the supplied values
    ///
    /// Returns `None` as soon as a declared parameter has no value.
    pub fn interleave(&self, values: &Map<String, Value>) -> Option<String> {
        let mut path = String::new();
        for (i, name) in self.params.iter().enumerate() {
            let value = values.get(name)?;
            path.push_str(self.literals.get(i).map(String::as_str).unwrap_or(""));
            path.push_str(&js_string(value));
        }
        if self.literals.len() > self.params.len() {
            path.push_str(&self.literals[self.params.len()]);
        }
        Some(path)
    }
}

impl Serialize for SerializedRoute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.endpoint, &self.literals, &self.params).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SerializedRoute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (endpoint, literals, params) = <(String, Vec<String>, Vec<String>)>::deserialize(deserializer)?;
        Ok(Self {
            endpoint,
            literals,
            params,
        })
    }
}

/// Serialized rules, most parameters first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<SerializedRoute>,
}

impl RouteTable {
    /// Builds the table from a registry
    ///
    /// The sort is stable: rules with equal parameter counts keep their
    /// registration order.
    pub fn from_registry<R: RouteRegistry + ?Sized>(registry: &R) -> Self {
        let mut routes: Vec<SerializedRoute> = registry
            .iter_rules()
            .map(|(endpoint, rule)| SerializedRoute::new(endpoint, rule))
            .collect();
        routes.sort_by(|a, b| b.params.len().cmp(&a.params.len()));

        tracing::debug!(routes = routes.len(), "route table built");
        Self { routes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SerializedRoute> {
        self.routes.iter()
    }

    /// Entries for `endpoint`, in table order
    pub fn candidates<'a>(&'a self, endpoint: &'a str) -> impl Iterator<Item = &'a SerializedRoute> + 'a {
        self.routes.iter().filter(move |r| r.endpoint == endpoint)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// JSON literal as embedded in the generated script
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.routes)
    }
}

/// Reads every rule of `registry` into a [`RouteTable`]
pub fn get_routes<R: RouteRegistry + ?Sized>(registry: &R) -> RouteTable {
    RouteTable::from_registry(registry)
}
