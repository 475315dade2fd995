//! Self-reference qualification
//!
//! Every `this` left in an accepted body is a receiver (`this.m()`,
//! `this.CONST`); anything else was rejected by the classifier. Each one is
//! replaced by the declaring type's simple name, keeping node id and span.

use crate::features::syntax_tree::fold::fold_expr_children;
use crate::features::syntax_tree::{Block, Expr, ExprKind, Folder};

/// Body with every `this` replaced by `type_name`
pub fn qualify_self_references(body: &Block, type_name: &str) -> Block {
    SelfReferenceQualifier { type_name }.fold_block(body)
}

struct SelfReferenceQualifier<'a> {
    type_name: &'a str,
}

impl Folder for SelfReferenceQualifier<'_> {
    fn fold_expr(&mut self, expr: &Expr) -> Expr {
        match expr.kind {
            ExprKind::This => expr.with_kind(ExprKind::TypeName(self.type_name.to_string())),
            _ => fold_expr_children(self, expr),
        }
    }
}
