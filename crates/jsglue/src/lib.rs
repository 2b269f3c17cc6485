// crates/jsglue/src/lib.rs — URL reversal for the browser, generated from the Axum route table
//
// The route registry (`jsglue_router::UrlMap`) is serialized into a compact
// positional table and embedded in a small script that defines
// `<Namespace>.url_for(endpoint, args)`.
//
// Typical wiring:
// - Record routes with `UrlMap::register` while building the axum `Router`.
// - `JsGlue::init_app(map, config)` adds the script route and freezes the map.
// - Merge `glue.router()` and interpolate `(glue)` in the page `<head>`.
//
// `UrlBuilder` runs the same reversal on the server, which is how the
// script tag finds its own URL.
pub mod args;
pub mod assets;
pub mod builder;
pub mod config;
pub mod error;
pub mod location;
pub mod script;
pub mod table;

pub use args::BuildArgs;
pub use assets::{JsGlue, SERVE_JS_ENDPOINT};
pub use builder::{Encoding, UrlBuilder};
pub use config::{JsGlueConfig, JSGLUE_JS_PATH, JSGLUE_NAMESPACE};
pub use error::{ConfigError, UrlError};
pub use location::Location;
pub use script::{generate_js, JS_CONTENT_TYPE};
pub use table::{get_routes, RouteTable, SerializedRoute};

pub use jsglue_router;
pub use maud;
