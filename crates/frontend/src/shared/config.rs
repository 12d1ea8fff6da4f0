use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute backend URL. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_toast_timeout")]
    pub timeout_ms: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u32 {
    10_000
}

fn default_toast_timeout() -> u32 {
    5_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
            timeout_ms: default_request_timeout(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_toast_timeout(),
        }
    }
}

/// Configuration compiled into the wasm bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load the embedded configuration
    ///
    /// Falls back to built-in defaults when the embedded file does not parse.
    pub fn load() -> Self {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => {
                log::debug!("Loaded embedded config: {:?}", config);
                config
            }
            Err(e) => {
                log::error!("Invalid embedded config.toml, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
