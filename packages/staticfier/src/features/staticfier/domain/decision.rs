//! Decision model
//!
//! Every rejection names its reason; instance references also carry the
//! source location of the first offending node.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// What kind of node made a method depend on its instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceReferenceKind {
    /// Bare name or `this.name` resolving to a non-static field
    InstanceField,
    /// Name the resolver could not account for
    UnresolvedName,
    /// `target.field` on a non-static field with an instance-dependent target
    InstanceFieldAccess,
    /// Call without receiver to a different non-static method
    ImplicitInstanceCall,
    /// Call whose target could not be pinned down
    UnresolvedCall,
    /// `this` used as a value
    ThisValue,
    /// `Outer.this`
    QualifiedThis,
    /// `super.x`, `super.m()`
    SuperReference,
    /// `this::m`, `super::m`
    SelfMethodReference,
    AnonymousClass,
    /// `new Inner()` where `Inner` needs the enclosing instance
    InnerClassCreation,
    LocalClass,
    UnsupportedSyntax,
}

impl InstanceReferenceKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::InstanceField => "reads instance field",
            Self::UnresolvedName => "uses unresolved name",
            Self::InstanceFieldAccess => "accesses field through instance-dependent target",
            Self::ImplicitInstanceCall => "calls instance method",
            Self::UnresolvedCall => "calls unresolved method",
            Self::ThisValue => "uses `this` as a value",
            Self::QualifiedThis => "uses qualified `this`",
            Self::SuperReference => "uses `super`",
            Self::SelfMethodReference => "takes method reference on `this`/`super`",
            Self::AnonymousClass => "declares anonymous class",
            Self::InnerClassCreation => "creates inner class instance",
            Self::LocalClass => "declares local class",
            Self::UnsupportedSyntax => "contains unsupported syntax",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceReference {
    pub kind: InstanceReferenceKind,
    /// Name, member or construct involved
    pub name: String,
    pub span: Span,
}

impl fmt::Display for InstanceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` at {}:{}",
            self.kind.describe(),
            self.name,
            self.span.start_line,
            self.span.start_col + 1
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    NotPrivate,
    AlreadyStatic,
    /// Abstract or native
    NoBody,
    /// The monitor would move from the instance to the class object
    Synchronized,
    UsesTypeParameter { name: String },
    InstanceReference(InstanceReference),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotPrivate => write!(f, "not private"),
            Rejection::AlreadyStatic => write!(f, "already static"),
            Rejection::NoBody => write!(f, "no body"),
            Rejection::Synchronized => write!(f, "synchronized"),
            Rejection::UsesTypeParameter { name } => {
                write!(f, "uses type parameter `{name}` of the enclosing type")
            }
            Rejection::InstanceReference(reference) => write!(f, "{reference}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Accept,
    Reject(Rejection),
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Decision::Accept)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Decision::Accept => None,
            Decision::Reject(rejection) => Some(rejection),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accept => write!(f, "accept"),
            Decision::Reject(rejection) => write!(f, "reject: {rejection}"),
        }
    }
}
