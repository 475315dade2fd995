//! Type parameter usage
//!
//! A static method cannot see the type parameters of its declaring type.
//! Any type text in the signature or body mentioning one of them (and not
//! shadowed by the method's own type parameters) blocks the conversion.

use crate::features::syntax_tree::visit::{walk_expr, walk_stmt, Visitor};
use crate::features::syntax_tree::{
    CaseLabel, Expr, ExprKind, MethodDeclaration, Resource, Stmt, StmtKind, SwitchBlock,
};
use crate::features::type_resolution::domain::type_tokens;

/// First enclosing type parameter mentioned by `method`, if any
pub fn first_type_parameter_use(method: &MethodDeclaration, type_parameters: &[String]) -> Option<String> {
    let visible: Vec<&str> = type_parameters
        .iter()
        .map(String::as_str)
        .filter(|p| !method.type_parameters.iter().any(|own| own == p))
        .collect();
    if visible.is_empty() {
        return None;
    }

    let mut finder = TypeParameterFinder {
        parameters: visible,
        found: None,
    };
    finder.check(&method.return_type);
    for param in &method.parameters {
        finder.check(&param.param_type);
    }
    if let Some(body) = &method.body {
        finder.visit_block(body);
    }
    finder.found
}

struct TypeParameterFinder<'p> {
    parameters: Vec<&'p str>,
    found: Option<String>,
}

impl TypeParameterFinder<'_> {
    fn check(&mut self, type_text: &str) {
        if self.found.is_some() {
            return;
        }
        self.found = type_tokens(type_text)
            .find(|token| self.parameters.contains(token))
            .map(str::to_string);
    }

    fn check_patterns(&mut self, switch: &SwitchBlock) {
        for arm in &switch.arms {
            for label in &arm.labels {
                if let CaseLabel::Pattern { pattern_type, .. } = label {
                    self.check(pattern_type);
                }
            }
        }
    }
}

impl Visitor for TypeParameterFinder<'_> {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        if self.found.is_some() {
            return;
        }
        match &stmt.kind {
            StmtKind::LocalVar { var_type, .. } | StmtKind::ForEach { var_type, .. } => {
                self.check(var_type)
            }
            StmtKind::Try {
                resources, catches, ..
            } => {
                for resource in resources {
                    if let Resource::Declaration { var_type, .. } = resource {
                        self.check(var_type);
                    }
                }
                for catch in catches {
                    for ty in &catch.types {
                        self.check(ty);
                    }
                }
            }
            StmtKind::Switch(switch) => self.check_patterns(switch),
            _ => {}
        }
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        if self.found.is_some() {
            return;
        }
        match &expr.kind {
            ExprKind::Cast { target_type, .. } | ExprKind::InstanceOf { target_type, .. } => {
                self.check(target_type)
            }
            ExprKind::NewClass(new) => self.check(&new.class_name),
            ExprKind::NewArray { element_type, .. } => self.check(element_type),
            ExprKind::ClassLiteral(ty) | ExprKind::TypeName(ty) => self.check(ty),
            ExprKind::Switch(switch) => self.check_patterns(switch),
            _ => {}
        }
        walk_expr(self, expr);
    }
}
