//! Resolved member references
//!
//! Attached to names, field accesses and invocations by the resolver.
//! A freshly lowered tree carries `Resolution::Unresolved` everywhere.

use serde::{Deserialize, Serialize};

use crate::shared::models::{MethodId, TypeId};

/// Declaring type of a member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Type declared in the compilation unit
    Unit(TypeId),
    /// Type known only by name (JDK, other files)
    External(String),
}

impl Owner {
    pub fn unit_type(&self) -> Option<TypeId> {
        match self {
            Owner::Unit(id) => Some(*id),
            Owner::External(_) => None,
        }
    }
}

/// Resolved field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub owner: Owner,
    pub name: String,
    pub is_static: bool,
}

/// Resolved method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Declaration identity; `None` for methods outside the unit
    pub id: Option<MethodId>,
    pub owner: Owner,
    pub name: String,
    pub is_static: bool,
}

impl MethodRef {
    /// Both refer to the very same declaration
    pub fn is_same_declaration(&self, other: &MethodRef) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// What a simple name refers to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// No information; analyses must treat this as unsafe
    #[default]
    Unresolved,
    /// Parameter, local variable, lambda parameter or pattern binding
    Local,
    Field(FieldRef),
    /// Type used as a qualifier (`Math` in `Math.max`)
    Type(Owner),
    /// Unqualified enum constant in a `case` label
    EnumConstant,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }

    pub fn field(&self) -> Option<&FieldRef> {
        match self {
            Resolution::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Local variables, types, enum constants and static fields do not
    /// depend on the enclosing instance
    pub fn is_instance_independent(&self) -> bool {
        match self {
            Resolution::Local | Resolution::Type(_) | Resolution::EnumConstant => true,
            Resolution::Field(field) => field.is_static,
            Resolution::Unresolved => false,
        }
    }
}

/// A name together with its resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub resolution: Resolution,
}

impl Identifier {
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolution: Resolution::Unresolved,
        }
    }

    pub fn resolved(name: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            name: name.into(),
            resolution,
        }
    }
}
