//! Staticfier Feature
//!
//! Decides whether a private instance method can become static and
//! performs the rewrite.
//!
//! ## Structure
//! - `domain/` - Decision, Rejection, TypeContext, EligibilityPolicy
//! - `infrastructure/` - classifier, modifier rewriter, self-reference
//!   qualifier, type parameter usage
//! - `application/` - EligibilityDecider, StaticfierRecipe

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    decide, make_static, EligibilityDecider, MethodChange, MethodOutcome, RecipeRun,
    StaticfierRecipe,
};
pub use domain::{
    Decision, EligibilityPolicy, InstanceReference, InstanceReferenceKind, Rejection, TypeContext,
};
