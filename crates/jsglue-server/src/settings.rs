// crates/jsglue-server/src/settings.rs — demo server settings from `jsglue.toml`
use anyhow::{Context, Result};
use jsglue::JsGlueConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub jsglue: JsGlueConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    3000
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Settings {
    /// Load from a specific path.
    /// Returns default settings if the file doesn't exist.
    pub fn load_from(path: &str) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).with_context(|| format!("failed to parse {}", path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path)),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.jsglue.validate()?;
        Ok(settings)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tables() {
        let settings = Settings::from_toml_str(
            "[server]\nport = 8080\n\n[jsglue]\njs_path = \"/urls.js\"\nnamespace = \"Demo\"\n",
        )
        .unwrap();
        assert_eq!(settings.addr(), "127.0.0.1:8080");
        assert_eq!(settings.jsglue.js_path, "/urls.js");
        assert_eq!(settings.jsglue.namespace, "Demo");
    }

    #[test]
    fn test_invalid_namespace_fails() {
        assert!(Settings::from_toml_str("[jsglue]\nnamespace = \"a-b\"\n").is_err());
    }
}
