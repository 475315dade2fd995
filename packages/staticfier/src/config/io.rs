//! Configuration I/O
//!
//! YAML schema types. Conversion to and from `StaticfierConfig` lives in
//! staticfier_config.rs.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
///
/// Every setting is optional; omitted ones keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_synchronized: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_dirs: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_bytes: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passes: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<ConfigFileV1, _> = serde_yaml::from_str("version: 1\nmax_depth: 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_file() {
        let file: ConfigFileV1 = serde_yaml::from_str("version: 1\nparallel: false\n").unwrap();
        assert_eq!(file.version, Some(1));
        assert_eq!(file.parallel, Some(false));
        assert!(file.extensions.is_none());
    }
}
