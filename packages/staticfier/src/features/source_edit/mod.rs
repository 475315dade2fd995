//! Source Edit Feature
//!
//! Turns a rewritten method declaration back into text. Only the byte
//! ranges that changed are replaced; everything else stays as written.
//!
//! ## Structure
//! - `domain/` - TextEdit
//! - `infrastructure/` - diffing a rewrite into edits
//! - `application/` - applying edits to source text

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::apply_edits;
pub use domain::TextEdit;
pub use infrastructure::edits_for_rewrite;
