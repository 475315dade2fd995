//! Shared utilities

pub mod id_generator;
pub mod scope_stack;
pub mod tree_sitter;

pub use id_generator::IdGenerator;
pub use scope_stack::{LocalKind, ScopeStack};
pub use self::tree_sitter::{
    all_children, children_by_field, field_text, find_child_by_kind, find_descendants_by_kind,
    first_error, named_children, node_text, node_to_span, SpanExt,
};
