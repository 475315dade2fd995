use crate::errors::{Result, StaticfierError};
use crate::features::staticfier::domain::{Decision, EligibilityPolicy, Rejection, TypeContext};
use crate::features::staticfier::infrastructure::{
    find_instance_reference, first_type_parameter_use, qualify_self_references, with_static,
};
use crate::features::syntax_tree::{MethodDeclaration, ModifierKind};

/// Decides and performs the private-instance-to-static conversion of a
/// single method declaration
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityDecider {
    policy: EligibilityPolicy,
}

impl EligibilityDecider {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EligibilityPolicy {
        self.policy
    }

    /// Decide whether `method` can become static
    ///
    /// Checks run cheapest first: modifiers, body presence, signature and
    /// body type texts, then the instance reference walk.
    ///
    /// # Errors
    /// `UnresolvedDeclaration` when the method carries no resolved identity.
    pub fn decide(&self, method: &MethodDeclaration, ctx: &TypeContext) -> Result<Decision> {
        let Some(self_ref) = &method.method_ref else {
            return Err(StaticfierError::unresolved(&method.name, ctx.type_name()));
        };

        let decision = if !method.is_private() {
            Decision::Reject(Rejection::NotPrivate)
        } else if method.is_static() {
            Decision::Reject(Rejection::AlreadyStatic)
        } else if let Some(body) = &method.body {
            if self.policy.reject_synchronized && method.has_modifier(ModifierKind::Synchronized) {
                Decision::Reject(Rejection::Synchronized)
            } else if let Some(name) = first_type_parameter_use(method, &ctx.type_parameters) {
                Decision::Reject(Rejection::UsesTypeParameter { name })
            } else if let Some(reference) = find_instance_reference(body, self_ref) {
                Decision::Reject(Rejection::InstanceReference(reference))
            } else {
                Decision::Accept
            }
        } else {
            Decision::Reject(Rejection::NoBody)
        };

        tracing::debug!(
            method = %method.qualified_name(),
            line = method.span.start_line,
            decision = %decision,
            "eligibility decided"
        );
        Ok(decision)
    }

    /// `method` rewritten when eligible, an identical copy otherwise
    pub fn make_static(&self, method: &MethodDeclaration, ctx: &TypeContext) -> Result<MethodDeclaration> {
        match self.decide(method, ctx)? {
            Decision::Accept => Ok(rewrite(method, ctx)),
            Decision::Reject(_) => Ok(method.clone()),
        }
    }
}

/// Rewrite an accepted method: `static` modifier, `this` qualified by the
/// declaring type's name
///
/// Callers must have obtained `Decision::Accept` for `method` first.
pub fn rewrite(method: &MethodDeclaration, ctx: &TypeContext) -> MethodDeclaration {
    let mut rewritten = method.clone();
    rewritten.modifiers = with_static(&method.modifiers);
    rewritten.body = method
        .body
        .as_ref()
        .map(|body| qualify_self_references(body, ctx.type_name()));
    if let Some(method_ref) = rewritten.method_ref.as_mut() {
        method_ref.is_static = true;
    }
    rewritten
}

/// Decide with the default policy
pub fn decide(method: &MethodDeclaration, ctx: &TypeContext) -> Result<Decision> {
    EligibilityDecider::default().decide(method, ctx)
}

/// Convert with the default policy; identity when rejected
pub fn make_static(method: &MethodDeclaration, ctx: &TypeContext) -> Result<MethodDeclaration> {
    EligibilityDecider::default().make_static(method, ctx)
}
