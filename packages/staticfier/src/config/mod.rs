//! Configuration
//!
//! One flat, versioned settings struct with builder setters and YAML
//! loading.
//!
//! ```yaml
//! version: 1
//! reject_synchronized: true
//! extensions: [java]
//! exclude_dirs: [.git, target, build]
//! max_file_bytes: 4194304
//! parallel: true
//! max_passes: 1
//! ```

pub mod error;
pub mod io;
pub mod staticfier_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use staticfier_config::StaticfierConfig;
pub use validation::Validatable;
