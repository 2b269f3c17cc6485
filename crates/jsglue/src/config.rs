// crates/jsglue/src/config.rs — jsglue settings, loaded from the `[jsglue]` table of `jsglue.toml`
use serde::{Deserialize, Serialize};

use crate::builder::Encoding;
use crate::error::ConfigError;

/// Default URL path of the generated script.
pub const JSGLUE_JS_PATH: &str = "/jsglue.js";

/// Default name of the global object the script defines.
pub const JSGLUE_NAMESPACE: &str = "JSGlue";

/// Default config file name.
pub const CONFIG_FILE: &str = "jsglue.toml";

/// jsglue settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsGlueConfig {
    /// Path the script is served at
    #[serde(default = "default_js_path")]
    pub js_path: String,

    /// Global object name exposed in the browser
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Percent-encode query keys, query values and anchors
    #[serde(default)]
    pub encode_values: bool,

    /// Generate the script once and reuse it
    #[serde(default)]
    pub cache_script: bool,
}

fn default_js_path() -> String {
    JSGLUE_JS_PATH.to_string()
}

fn default_namespace() -> String {
    JSGLUE_NAMESPACE.to_string()
}

impl Default for JsGlueConfig {
    fn default() -> Self {
        Self {
            js_path: default_js_path(),
            namespace: default_namespace(),
            encode_values: false,
            cache_script: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    jsglue: JsGlueConfig,
}

impl JsGlueConfig {
    /// Load from `jsglue.toml` in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from a specific path.
    /// Returns default config if the file doesn't exist.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).map_err(|err| match err {
                ConfigError::Parse { source, .. } => ConfigError::Parse {
                    path: path.to_string(),
                    source,
                },
                other => other,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_string(),
                source,
            }),
        }
    }

    /// Like [`JsGlueConfig::load_from`], falling back to defaults on any error
    pub fn load_or_default(path: &str) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("{}, using default jsglue config", e);
            Self::default()
        })
    }

    /// Parses the `[jsglue]` table of a TOML document and validates it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: "<string>".to_string(),
            source,
        })?;
        file.jsglue.validate()?;
        Ok(file.jsglue)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_js_identifier(&self.namespace) {
            return Err(ConfigError::InvalidNamespace(self.namespace.clone()));
        }
        if !self.js_path.starts_with('/') || self.js_path.contains('<') {
            return Err(ConfigError::InvalidJsPath(self.js_path.clone()));
        }
        Ok(())
    }

    pub fn encoding(&self) -> Encoding {
        if self.encode_values {
            Encoding::Percent
        } else {
            Encoding::Raw
        }
    }
}

/// ASCII JavaScript identifier: `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_table_missing() {
        let config = JsGlueConfig::from_toml_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config, JsGlueConfig::default());
        assert_eq!(config.js_path, "/jsglue.js");
        assert_eq!(config.encoding(), Encoding::Raw);
    }

    #[test]
    fn test_partial_table() {
        let config = JsGlueConfig::from_toml_str("[jsglue]\nnamespace = \"Axum\"\nencode_values = true\n").unwrap();
        assert_eq!(config.namespace, "Axum");
        assert_eq!(config.js_path, "/jsglue.js");
        assert_eq!(config.encoding(), Encoding::Percent);
    }

    #[test]
    fn test_invalid_namespace() {
        let err = JsGlueConfig::from_toml_str("[jsglue]\nnamespace = \"my-app\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNamespace(_)));
    }

    #[test]
    fn test_invalid_js_path() {
        let config = JsGlueConfig {
            js_path: "jsglue.js".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidJsPath(_))));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = JsGlueConfig::load_from("/nonexistent/jsglue.toml").unwrap();
        assert_eq!(config, JsGlueConfig::default());
    }

    #[test]
    fn test_identifier_rules() {
        assert!(is_js_identifier("Flask"));
        assert!(is_js_identifier("$app_1"));
        assert!(!is_js_identifier("1app"));
        assert!(!is_js_identifier(""));
        assert!(!is_js_identifier("a.b"));
    }
}
