//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting outside its allowed range
    #[error("Setting '{setting}' = {value} is outside {allowed}. {hint}")]
    Range {
        setting: String,
        value: String,
        allowed: String,
        hint: String,
    },

    #[error("Configuration has no 'version' key; start the file with 'version: 1'")]
    MissingVersion,

    #[error("Configuration version {found} is not supported (expected one of: {})", supported.iter().map(u32::to_string).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML, or a key the file format does not know
    #[error("Invalid configuration YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// `value` of `setting` fell outside `min..=max`
    pub fn out_of_range(
        setting: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            setting: setting.into(),
            value: value.to_string(),
            allowed: format!("{}..={}", min.to_string(), max.to_string()),
            hint: hint.into(),
        }
    }
}
