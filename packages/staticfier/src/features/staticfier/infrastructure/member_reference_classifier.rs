/*
 * Member Reference Classifier
 *
 * Walks a method body and reports the first node that depends on the
 * enclosing instance. Purely syntactic over the resolved tree: called
 * methods are never inspected, and anything unresolved counts as a
 * reference.
 *
 * RULES:
 * - bare name → non-static field or unresolved: instance reference
 * - `target.field` on a non-static/unresolved field: instance reference
 *   unless the target is instance-independent (fresh array or object,
 *   local, type, static field, or a selection from one of those)
 * - call without receiver: fine when static or the method itself
 * - `this.` as receiver is transparent; `this` anywhere else is not
 */

use crate::features::staticfier::domain::{InstanceReference, InstanceReferenceKind};
use crate::features::syntax_tree::visit::{walk_expr, walk_stmt, Visitor};
use crate::features::syntax_tree::{
    Block, Expr, ExprKind, Identifier, MethodInvocation, MethodRef, Resolution, Stmt, StmtKind,
};
use crate::shared::models::Span;

/// First instance reference in `body`, if any
pub fn find_instance_reference(body: &Block, self_ref: &MethodRef) -> Option<InstanceReference> {
    let mut classifier = MemberReferenceClassifier::new(self_ref);
    classifier.visit_block(body);
    classifier.found
}

/// Whether `body` reads or invokes instance state
pub fn references_instance_state(body: &Block, self_ref: &MethodRef) -> bool {
    find_instance_reference(body, self_ref).is_some()
}

/// Target shapes whose evaluation cannot involve the enclosing instance
/// by themselves (their sub-expressions are still walked)
pub fn is_instance_independent(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::NewArray { .. } | ExprKind::TypeName(_) | ExprKind::Literal(_) => true,
        ExprKind::NewClass(new) => !new.has_body,
        ExprKind::Name(id) => id.resolution.is_instance_independent(),
        ExprKind::FieldAccess { target, field } => {
            field.resolution.is_instance_independent() || is_instance_independent(target)
        }
        ExprKind::Parenthesized(inner) | ExprKind::Cast { expr: inner, .. } => {
            is_instance_independent(inner)
        }
        ExprKind::ArrayAccess { array, .. } => is_instance_independent(array),
        _ => false,
    }
}

struct MemberReferenceClassifier<'m> {
    self_ref: &'m MethodRef,
    found: Option<InstanceReference>,
}

impl<'m> MemberReferenceClassifier<'m> {
    fn new(self_ref: &'m MethodRef) -> Self {
        Self {
            self_ref,
            found: None,
        }
    }

    fn report(&mut self, kind: InstanceReferenceKind, name: &str, span: Span) {
        if self.found.is_none() {
            self.found = Some(InstanceReference {
                kind,
                name: name.to_string(),
                span,
            });
        }
    }

    fn check_name(&mut self, id: &Identifier, span: Span) {
        match &id.resolution {
            Resolution::Field(field) if !field.is_static => {
                self.report(InstanceReferenceKind::InstanceField, &id.name, span)
            }
            Resolution::Unresolved => {
                self.report(InstanceReferenceKind::UnresolvedName, &id.name, span)
            }
            _ => {}
        }
    }

    fn check_field_access(&mut self, expr: &Expr, target: &Expr, field: &Identifier) {
        if target.is_this() {
            // `this.x` reads exactly what a bare `x` would
            self.check_name(field, expr.span);
            return;
        }
        self.visit_expr(target);
        if !field.resolution.is_instance_independent() && !is_instance_independent(target) {
            self.report(InstanceReferenceKind::InstanceFieldAccess, &field.name, expr.span);
        }
    }

    /// Call through the implicit receiver (no receiver, or `this.`)
    fn check_implicit_call(&mut self, inv: &MethodInvocation, span: Span) {
        match &inv.method {
            None => self.report(InstanceReferenceKind::UnresolvedCall, &inv.name, span),
            Some(method) if method.is_static || method.is_same_declaration(self.self_ref) => {}
            Some(_) => self.report(InstanceReferenceKind::ImplicitInstanceCall, &inv.name, span),
        }
    }
}

impl Visitor for MemberReferenceClassifier<'_> {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        if self.found.is_some() {
            return;
        }
        match &stmt.kind {
            StmtKind::LocalClass(name) => {
                self.report(InstanceReferenceKind::LocalClass, name, stmt.span)
            }
            StmtKind::Unsupported(kind) => {
                self.report(InstanceReferenceKind::UnsupportedSyntax, kind, stmt.span)
            }
            _ => walk_stmt(self, stmt),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        if self.found.is_some() {
            return;
        }
        match &expr.kind {
            ExprKind::Name(id) => self.check_name(id, expr.span),
            ExprKind::This => self.report(InstanceReferenceKind::ThisValue, "this", expr.span),
            ExprKind::QualifiedThis(outer) => {
                self.report(InstanceReferenceKind::QualifiedThis, outer, expr.span)
            }
            ExprKind::Super => self.report(InstanceReferenceKind::SuperReference, "super", expr.span),
            ExprKind::FieldAccess { target, field } => self.check_field_access(expr, target, field),
            ExprKind::MethodInvocation(inv) => {
                match &inv.select {
                    None => self.check_implicit_call(inv, expr.span),
                    Some(select) if select.is_this() => self.check_implicit_call(inv, expr.span),
                    Some(select) => self.visit_expr(select),
                }
                for arg in &inv.args {
                    self.visit_expr(arg);
                }
            }
            ExprKind::MethodReference { target, name } => match &target.kind {
                ExprKind::This | ExprKind::Super | ExprKind::QualifiedThis(_) => {
                    self.report(InstanceReferenceKind::SelfMethodReference, name, expr.span)
                }
                _ => self.visit_expr(target),
            },
            ExprKind::NewClass(new) if new.has_body => {
                self.report(InstanceReferenceKind::AnonymousClass, &new.class_name, expr.span)
            }
            ExprKind::NewClass(new) if new.captures_enclosing_instance => {
                self.report(InstanceReferenceKind::InnerClassCreation, &new.class_name, expr.span)
            }
            ExprKind::Unsupported(kind) => {
                self.report(InstanceReferenceKind::UnsupportedSyntax, kind, expr.span)
            }
            _ => walk_expr(self, expr),
        }
    }
}
