//! Shared module - Common types and utilities
//!
//! Types that are shared across all features.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::id_generator::IdGenerator;
pub use utils::scope_stack::{LocalKind, ScopeStack};
