//! Typed identifiers
//!
//! Plain index newtypes. Node ids are unique within one compilation unit;
//! type and method ids index into that unit's symbol table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntax node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Id given to nodes created by a rewrite rather than read from source
    pub const SYNTHETIC: NodeId = NodeId(u32::MAX);

    pub fn is_synthetic(&self) -> bool {
        *self == Self::SYNTHETIC
    }
}

/// Type declaration identifier (class, interface, enum, record)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// Method declaration identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "method#{}", self.0)
    }
}
