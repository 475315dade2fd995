//! Syntax Tree Feature
//!
//! Immutable, resolved Java syntax tree consumed by the analyses.
//!
//! ## Structure
//! - `domain/` - declarations, statements, expressions, modifiers, references
//! - `visit`   - read-only traversal (`Visitor`)
//! - `fold`    - rebuilding traversal (`Folder`)

pub mod domain;
pub mod fold;
pub mod visit;

pub use domain::*;
pub use fold::Folder;
pub use visit::Visitor;
