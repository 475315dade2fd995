//! Shared models

mod ids;
mod span;

pub use ids::{MethodId, NodeId, TypeId};
pub use span::Span;
