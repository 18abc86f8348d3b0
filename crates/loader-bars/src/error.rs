use std::fmt;

/// Format a loader configuration was being read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Json => write!(f, "JSON"),
        }
    }
}

/// A loader configuration document that could not be parsed.
///
/// Rendering itself never fails; this only surfaces from the
/// `LoaderBarsConfig::from_*_str` loaders.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub format: ConfigFormat,
    pub message: String,
}

impl ConfigError {
    pub fn toml(message: impl Into<String>) -> Self {
        Self {
            format: ConfigFormat::Toml,
            message: message.into(),
        }
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self {
            format: ConfigFormat::Json,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} loader config: {}", self.format, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::toml(err.message())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::json(err.to_string())
    }
}
