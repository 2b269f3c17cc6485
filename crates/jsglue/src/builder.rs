//! Server-side URL reversal
//!
//! [`UrlBuilder`] applies the same algorithm as the generated script's
//! `url_for` to a [`RouteTable`], so links rendered on the server and links
//! built in the browser agree.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::args::{js_string, BuildArgs};
use crate::error::UrlError;
use crate::location::Location;
use crate::table::RouteTable;

/// How query keys, query values and the anchor are written
///
/// Path parameter values are never encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Written verbatim
    #[default]
    Raw,
    /// Percent-encoded, like `encodeURIComponent`
    Percent,
}

impl Encoding {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Encoding::Raw => Cow::Borrowed(text),
            Encoding::Percent => urlencoding::encode(text),
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, Encoding::Percent)
    }
}

/// Builds URLs from a [`RouteTable`]
///
/// ```
/// use jsglue::{BuildArgs, RouteTable, UrlBuilder};
///
/// let table = RouteTable::from_registry(&[("show_item", "/item/<int:id>")][..]);
/// let url = UrlBuilder::new(&table)
///     .build("show_item", &BuildArgs::new().arg("id", 5).arg("highlight", true))
///     .unwrap();
/// assert_eq!(url, "/item/5?highlight=true");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UrlBuilder<'a> {
    table: &'a RouteTable,
    location: Option<&'a Location>,
    encoding: Encoding,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(table: &'a RouteTable) -> Self {
        Self {
            table,
            location: None,
            encoding: Encoding::Raw,
        }
    }

    /// Sets the page location used for absolute URLs
    pub fn with_location(mut self, location: &'a Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Builds the URL for `endpoint`
    ///
    /// Entries are tried in table order; the first whose parameters are all
    /// present wins. Unused values whose keys do not start with `_` become
    /// the query string.
    pub fn build(&self, endpoint: &str, args: &BuildArgs) -> Result<String, UrlError> {
        if args.scheme.is_some() && !args.external {
            return Err(UrlError::SchemeWithoutExternal);
        }

        for route in self.table.candidates(endpoint) {
            let Some(mut url) = route.interleave(&args.values) else {
                continue;
            };

            let mut separator = '?';
            for (key, value) in &args.values {
                if key.starts_with('_') || route.params.iter().any(|p| p == key) {
                    continue;
                }
                url.push(separator);
                url.push_str(&self.encoding.apply(key));
                url.push('=');
                url.push_str(&self.encoding.apply(&js_string(value)));
                separator = '&';
            }

            if let Some(anchor) = &args.anchor {
                url.push('#');
                url.push_str(&self.encoding.apply(anchor));
            }

            if !args.external {
                return Ok(url);
            }
            let location = self.location.ok_or_else(|| UrlError::MissingLocation {
                endpoint: endpoint.to_string(),
            })?;
            let scheme = args.scheme.as_deref().unwrap_or_else(|| location.scheme());
            return Ok(format!("{}://{}{}", scheme, location.host, url));
        }

        Err(UrlError::Build {
            endpoint: endpoint.to_string(),
            arguments: args.to_value().to_string(),
        })
    }

    /// Builds from the flat reserved-key form the browser accepts
    ///
    /// `None` stands for an omitted argument object.
    pub fn build_value(&self, endpoint: &str, args: Option<&Value>) -> Result<String, UrlError> {
        let args = match args {
            Some(value) => BuildArgs::from_value(value)?,
            None => BuildArgs::default(),
        };
        self.build(endpoint, &args)
    }
}
