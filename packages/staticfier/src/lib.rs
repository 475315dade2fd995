/*
 * Staticfier - make private instance methods static
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, ids) and utilities
 * - features/    : Vertical slices (parsing → type_resolution → staticfier → source_edit)
 * - pipeline/    : Per-file and batch orchestration
 * - config/      : Versioned YAML configuration
 *
 * A method is converted only when it is private, not yet static, and its
 * body provably reads no instance state. Everything else is left
 * byte-identical.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::StaticfierConfig;
pub use errors::{Result, StaticfierError};
pub use features::staticfier::{
    decide, make_static, Decision, EligibilityPolicy, Rejection, StaticfierRecipe, TypeContext,
};
pub use pipeline::{process_paths, process_source, BatchReport, FileOutcome};

// ═══════════════════════════════════════════════════════════════════════════
// Rayon Thread Pool
// ═══════════════════════════════════════════════════════════════════════════

/// Default worker count for batch runs (75% of cores, at least one)
pub fn default_thread_count() -> usize {
    std::cmp::max(1, (num_cpus::get() * 3) / 4)
}
