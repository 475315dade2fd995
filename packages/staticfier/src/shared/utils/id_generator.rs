//! ID generation utilities
//!
//! Sequential, deterministic ids. Parsing the same source twice yields the
//! same ids, which keeps reports and snapshots stable.

use crate::shared::models::{MethodId, NodeId, TypeId};

/// ID Generator for syntax nodes and declarations of one compilation unit
#[derive(Debug, Default)]
pub struct IdGenerator {
    next_node: u32,
    next_type: u32,
    next_method: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next syntax node id
    pub fn next_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    /// Next type declaration id
    pub fn next_type(&mut self) -> TypeId {
        let id = TypeId(self.next_type);
        self.next_type += 1;
        id
    }

    /// Next method declaration id
    pub fn next_method(&mut self) -> MethodId {
        let id = MethodId(self.next_method);
        self.next_method += 1;
        id
    }
}
