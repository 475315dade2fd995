//! Read-only traversal
//!
//! Override a `visit_*` method and call the matching `walk_*` function to
//! keep descending.

use super::domain::{
    Block, CaseLabel, Expr, ExprKind, LambdaBody, Resource, Stmt, StmtKind, SwitchBlock,
};

pub trait Visitor {
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &Block) {
    for stmt in &block.stmts {
        v.visit_stmt(stmt);
    }
}

pub fn walk_switch<V: Visitor + ?Sized>(v: &mut V, switch: &SwitchBlock) {
    v.visit_expr(&switch.selector);
    for arm in &switch.arms {
        for label in &arm.labels {
            if let CaseLabel::Expr(expr) = label {
                v.visit_expr(expr);
            }
        }
        if let Some(guard) = &arm.guard {
            v.visit_expr(guard);
        }
        for stmt in &arm.body {
            v.visit_stmt(stmt);
        }
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::LocalVar { declarators, .. } => {
            for decl in declarators {
                if let Some(init) = &decl.init {
                    v.visit_expr(init);
                }
            }
        }
        StmtKind::Expression(expr) | StmtKind::Throw(expr) | StmtKind::Yield(expr) => {
            v.visit_expr(expr)
        }
        StmtKind::Block(block) => v.visit_block(block),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            v.visit_expr(condition);
            v.visit_stmt(then_branch);
            if let Some(else_branch) = else_branch {
                v.visit_stmt(else_branch);
            }
        }
        StmtKind::While { condition, body } | StmtKind::DoWhile { body, condition } => {
            v.visit_expr(condition);
            v.visit_stmt(body);
        }
        StmtKind::For {
            init,
            condition,
            update,
            body,
        } => {
            for s in init {
                v.visit_stmt(s);
            }
            if let Some(condition) = condition {
                v.visit_expr(condition);
            }
            for e in update {
                v.visit_expr(e);
            }
            v.visit_stmt(body);
        }
        StmtKind::ForEach { iterable, body, .. } => {
            v.visit_expr(iterable);
            v.visit_stmt(body);
        }
        StmtKind::Return(expr) => {
            if let Some(expr) = expr {
                v.visit_expr(expr);
            }
        }
        StmtKind::Try {
            resources,
            body,
            catches,
            finally,
        } => {
            for resource in resources {
                match resource {
                    Resource::Declaration { init, .. } => v.visit_expr(init),
                    Resource::Expr(expr) => v.visit_expr(expr),
                }
            }
            v.visit_block(body);
            for catch in catches {
                v.visit_block(&catch.body);
            }
            if let Some(finally) = finally {
                v.visit_block(finally);
            }
        }
        StmtKind::Switch(switch) => walk_switch(v, switch),
        StmtKind::Synchronized { lock, body } => {
            v.visit_expr(lock);
            v.visit_block(body);
        }
        StmtKind::Labeled { body, .. } => v.visit_stmt(body),
        StmtKind::Assert { condition, message } => {
            v.visit_expr(condition);
            if let Some(message) = message {
                v.visit_expr(message);
            }
        }
        StmtKind::Break(_)
        | StmtKind::Continue(_)
        | StmtKind::LocalClass(_)
        | StmtKind::Empty
        | StmtKind::Unsupported(_) => {}
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Literal(_)
        | ExprKind::Name(_)
        | ExprKind::TypeName(_)
        | ExprKind::This
        | ExprKind::QualifiedThis(_)
        | ExprKind::Super
        | ExprKind::ClassLiteral(_)
        | ExprKind::Unsupported(_) => {}
        ExprKind::FieldAccess { target, .. } => v.visit_expr(target),
        ExprKind::MethodInvocation(inv) => {
            if let Some(select) = &inv.select {
                v.visit_expr(select);
            }
            for arg in &inv.args {
                v.visit_expr(arg);
            }
        }
        ExprKind::NewClass(new) => {
            if let Some(outer) = &new.outer {
                v.visit_expr(outer);
            }
            for arg in &new.args {
                v.visit_expr(arg);
            }
        }
        ExprKind::NewArray {
            dimensions,
            initializer,
            ..
        } => {
            for dim in dimensions {
                v.visit_expr(dim);
            }
            if let Some(items) = initializer {
                for item in items {
                    v.visit_expr(item);
                }
            }
        }
        ExprKind::ArrayInitializer(items) => {
            for item in items {
                v.visit_expr(item);
            }
        }
        ExprKind::ArrayAccess { array, index } => {
            v.visit_expr(array);
            v.visit_expr(index);
        }
        ExprKind::Assign { target, value, .. } => {
            v.visit_expr(target);
            v.visit_expr(value);
        }
        ExprKind::Binary { lhs, rhs, .. } => {
            v.visit_expr(lhs);
            v.visit_expr(rhs);
        }
        ExprKind::Unary { operand, .. } => v.visit_expr(operand),
        ExprKind::Ternary {
            condition,
            then_expr,
            else_expr,
        } => {
            v.visit_expr(condition);
            v.visit_expr(then_expr);
            v.visit_expr(else_expr);
        }
        ExprKind::Cast { expr, .. }
        | ExprKind::InstanceOf { expr, .. }
        | ExprKind::Parenthesized(expr) => v.visit_expr(expr),
        ExprKind::Lambda { body, .. } => match body {
            LambdaBody::Expr(expr) => v.visit_expr(expr),
            LambdaBody::Block(block) => v.visit_block(block),
        },
        ExprKind::MethodReference { target, .. } => v.visit_expr(target),
        ExprKind::Switch(switch) => walk_switch(v, switch),
    }
}
