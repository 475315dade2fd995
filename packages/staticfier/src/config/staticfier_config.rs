//! Run configuration
//!
//! ```rust,ignore
//! use staticfier::config::StaticfierConfig;
//!
//! let config = StaticfierConfig::default()
//!     .reject_synchronized(false)
//!     .exclude_dir("generated");
//!
//! let config = StaticfierConfig::from_file("staticfier.yaml")?;
//! ```

use std::path::Path;

use serde::Serialize;

use crate::features::staticfier::EligibilityPolicy;

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;
use super::validation::{check_range, Validatable};

const SUPPORTED_VERSIONS: &[u32] = &[1];

pub const MIN_FILE_BYTES: u64 = 1024;
pub const MAX_FILE_BYTES: u64 = 256 * 1024 * 1024;
pub const DEFAULT_MAX_FILE_BYTES: u64 = 4 * 1024 * 1024;
pub const MAX_PASSES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticfierConfig {
    /// Leave `synchronized` methods alone
    pub reject_synchronized: bool,
    /// File extensions to process, without the dot
    pub extensions: Vec<String>,
    /// Directory names skipped during the walk
    pub exclude_dirs: Vec<String>,
    /// Larger files are skipped
    pub max_file_bytes: u64,
    /// Process files on the rayon pool
    pub parallel: bool,
    /// Pool size; `None` sizes the pool from the core count
    pub threads: Option<usize>,
    /// Recipe runs per file; later runs pick up callers of methods made
    /// static by an earlier run
    pub max_passes: usize,
}

impl Default for StaticfierConfig {
    fn default() -> Self {
        Self {
            reject_synchronized: true,
            extensions: vec!["java".to_string()],
            exclude_dirs: [".git", "target", "build", "out", "node_modules"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            parallel: true,
            threads: None,
            max_passes: 1,
        }
    }
}

impl StaticfierConfig {
    pub fn reject_synchronized(mut self, reject: bool) -> Self {
        self.reject_synchronized = reject;
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_dir(mut self, dir: impl Into<String>) -> Self {
        self.exclude_dirs.push(dir.into());
        self
    }

    pub fn max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Eligibility rules derived from this configuration
    pub fn policy(&self) -> EligibilityPolicy {
        EligibilityPolicy {
            reject_synchronized: self.reject_synchronized,
        }
    }

    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        let config = Self {
            reject_synchronized: file
                .reject_synchronized
                .unwrap_or(defaults.reject_synchronized),
            extensions: file.extensions.unwrap_or(defaults.extensions),
            exclude_dirs: file.exclude_dirs.unwrap_or(defaults.exclude_dirs),
            max_file_bytes: file.max_file_bytes.unwrap_or(defaults.max_file_bytes),
            parallel: file.parallel.unwrap_or(defaults.parallel),
            threads: file.threads.or(defaults.threads),
            max_passes: file.max_passes.unwrap_or(defaults.max_passes),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            reject_synchronized: Some(self.reject_synchronized),
            extensions: Some(self.extensions.clone()),
            exclude_dirs: Some(self.exclude_dirs.clone()),
            max_file_bytes: Some(self.max_file_bytes),
            parallel: Some(self.parallel),
            threads: self.threads,
            max_passes: Some(self.max_passes),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

impl Validatable for StaticfierConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "max_file_bytes",
            self.max_file_bytes,
            MIN_FILE_BYTES,
            MAX_FILE_BYTES,
            "Size limit must be between 1 KiB and 256 MiB",
        )?;
        check_range(
            "max_passes",
            self.max_passes,
            1,
            MAX_PASSES,
            "At least one pass is needed",
        )?;
        if let Some(threads) = self.threads {
            check_range("threads", threads, 1, 256, "Omit `threads` to size the pool automatically")?;
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "extensions must name at least one file extension".to_string(),
            ));
        }
        if let Some(bad) = self.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(ConfigError::Invalid(format!(
                "extension '{bad}' must be non-empty and given without the leading dot"
            )));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "StaticfierConfig"
    }
}
