mod decision;
mod policy;
mod type_context;

pub use decision::{Decision, InstanceReference, InstanceReferenceKind, Rejection};
pub use policy::EligibilityPolicy;
pub use type_context::TypeContext;
