//! Build arguments
//!
//! Callers in Rust use the structured [`BuildArgs`]; the browser keeps the
//! flat convention where `_external`, `_scheme` and `_anchor` share one
//! object with the route values. [`BuildArgs::from_value`] and
//! [`BuildArgs::to_value`] convert between the two.

use serde_json::{Map, Value};

use crate::error::UrlError;

pub const EXTERNAL_KEY: &str = "_external";
pub const SCHEME_KEY: &str = "_scheme";
pub const ANCHOR_KEY: &str = "_anchor";

/// Arguments for one URL build
///
/// `values` holds route parameters and extra query parameters alike, in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildArgs {
    pub external: bool,
    pub scheme: Option<String>,
    pub anchor: Option<String>,
    pub values: Map<String, Value>,
}

impl BuildArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests an absolute URL
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Adds a route or query value
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Parses the flat reserved-key form
    ///
    /// Only `_external: true` marks the URL absolute; any other `_external`
    /// value stays among the values, where its leading underscore keeps it
    /// out of the query string.
    ///
    /// ```
    /// use jsglue::BuildArgs;
    /// use serde_json::json;
    ///
    /// let args = BuildArgs::from_value(&json!({"id": 5, "_anchor": "top"})).unwrap();
    /// assert_eq!(args.anchor.as_deref(), Some("top"));
    /// assert_eq!(args.values.len(), 1);
    ///
    /// assert!(BuildArgs::from_value(&json!([1, 2])).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, UrlError> {
        let Value::Object(object) = value else {
            return Err(UrlError::InvalidArguments {
                type_name: js_type_name(value).to_string(),
            });
        };

        let mut args = Self::default();
        for (key, value) in object {
            match key.as_str() {
                EXTERNAL_KEY if *value == Value::Bool(true) => args.external = true,
                SCHEME_KEY => args.scheme = Some(js_string(value)),
                ANCHOR_KEY => args.anchor = Some(js_string(value)),
                _ => {
                    args.values.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(args)
    }

    /// Renders the flat reserved-key form
    pub fn to_value(&self) -> Value {
        let mut object = self.values.clone();
        if self.external {
            object.insert(EXTERNAL_KEY.to_string(), Value::Bool(true));
        }
        if let Some(scheme) = &self.scheme {
            object.insert(SCHEME_KEY.to_string(), Value::String(scheme.clone()));
        }
        if let Some(anchor) = &self.anchor {
            object.insert(ANCHOR_KEY.to_string(), Value::String(anchor.clone()));
        }
        Value::Object(object)
    }
}

impl TryFrom<Value> for BuildArgs {
    type Error = UrlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// String coercion matching JavaScript's `String(value)`
///
/// Floats follow `Number.prototype.toString` (shortest round-trip digits,
/// exponent form below `1e-6` and from `1e21`, `-0` as `"0"`). Integers are
/// printed exactly; past 2^53 a browser would round them first.
///
/// ```
/// use jsglue::args::js_string;
/// use serde_json::json;
///
/// assert_eq!(js_string(&json!(5)), "5");
/// assert_eq!(js_string(&json!(2.0)), "2");
/// assert_eq!(js_string(&json!(1e21)), "1e+21");
/// assert_eq!(js_string(&json!(true)), "true");
/// assert_eq!(js_string(&json!([1, null, "a"])), "1,,a");
/// ```
pub fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => js_number(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `Number.prototype.toString()` for a double
///
/// Rust's `{:e}` already yields the shortest round-trip digits; only the
/// placement of the decimal point and exponent differs.
fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", js_number(-n));
    }

    let sci = format!("{:e}", n);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exp + 1;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if point - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (point - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (point - 1).abs())
        }
    }
}

/// Type name reported when arguments are not an object
fn js_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
