// crates/jsglue/src/script.rs — generation of the client-side url_for script
use crate::builder::Encoding;
use crate::table::RouteTable;

/// Template of the generated script, embedded at compile time.
pub const URL_FOR_TEMPLATE: &str = include_str!("../js/url_for.js");

/// Content type the script is served with.
pub const JS_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

const NAMESPACE_TOKEN: &str = "__JSGLUE_NAMESPACE__";
const ENCODE_TOKEN: &str = "__JSGLUE_ENCODE__";
const ENDPOINTS_TOKEN: &str = "__JSGLUE_ENDPOINTS__";

/// Renders the script assigning `var <namespace>` with the embedded table
///
/// The table is substituted last so that rule text can never be mistaken
/// for a template token.
pub fn generate_js(
    table: &RouteTable,
    namespace: &str,
    encoding: Encoding,
) -> Result<String, serde_json::Error> {
    let endpoints = table.to_json()?;
    let encode = if encoding.is_percent() { "true" } else { "false" };

    Ok(URL_FOR_TEMPLATE
        .replace(NAMESPACE_TOKEN, namespace)
        .replace(ENCODE_TOKEN, encode)
        .replace(ENDPOINTS_TOKEN, &endpoints))
}
