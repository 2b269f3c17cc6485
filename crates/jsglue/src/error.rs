// crates/jsglue/src/error.rs — error kinds raised while building URLs or loading config
use thiserror::Error;

/// Failure to build a URL
///
/// The variants line up with the errors thrown by the generated script;
/// [`UrlError::name`] gives the matching client-side name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Build arguments were not a key-value mapping
    #[error("arguments must be an Object, got: {type_name}")]
    InvalidArguments { type_name: String },

    #[error("_scheme is set without _external.")]
    SchemeWithoutExternal,

    /// No rule for the endpoint has all of its parameters supplied
    #[error("Endpoint '{endpoint}' does not exist or you have passed incorrect parameters {arguments}")]
    Build { endpoint: String, arguments: String },

    /// An absolute URL was requested but no page location is known
    #[error("cannot build an absolute URL for '{endpoint}' without a location")]
    MissingLocation { endpoint: String },
}

impl UrlError {
    /// Error name as thrown by the browser-side `url_for`
    pub fn name(&self) -> &'static str {
        match self {
            UrlError::InvalidArguments { .. } => "TypeError",
            UrlError::SchemeWithoutExternal | UrlError::MissingLocation { .. } => "ValueError",
            UrlError::Build { .. } => "BuildError",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("namespace {0:?} is not a valid JavaScript identifier")]
    InvalidNamespace(String),

    #[error("js_path {0:?} must start with '/' and contain no placeholders")]
    InvalidJsPath(String),
}
