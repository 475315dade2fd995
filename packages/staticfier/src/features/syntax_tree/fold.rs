//! Rebuilding traversal
//!
//! A `Folder` produces a new tree from an existing one. Node ids and spans
//! are carried over unchanged, so the result can be compared node-for-node
//! with its input.

use super::domain::{
    Block, CaseLabel, CatchClause, Expr, ExprKind, LambdaBody, MethodInvocation, NewClass,
    Resource, Stmt, StmtKind, SwitchArm, SwitchBlock, VarDeclarator,
};

pub trait Folder {
    fn fold_block(&mut self, block: &Block) -> Block {
        fold_block_children(self, block)
    }

    fn fold_stmt(&mut self, stmt: &Stmt) -> Stmt {
        fold_stmt_children(self, stmt)
    }

    fn fold_expr(&mut self, expr: &Expr) -> Expr {
        fold_expr_children(self, expr)
    }
}

fn fold_box_expr<F: Folder + ?Sized>(f: &mut F, expr: &Expr) -> Box<Expr> {
    Box::new(f.fold_expr(expr))
}

fn fold_exprs<F: Folder + ?Sized>(f: &mut F, exprs: &[Expr]) -> Vec<Expr> {
    exprs.iter().map(|e| f.fold_expr(e)).collect()
}

pub fn fold_block_children<F: Folder + ?Sized>(f: &mut F, block: &Block) -> Block {
    Block {
        id: block.id,
        span: block.span,
        stmts: block.stmts.iter().map(|s| f.fold_stmt(s)).collect(),
    }
}

pub fn fold_declarators<F: Folder + ?Sized>(f: &mut F, declarators: &[VarDeclarator]) -> Vec<VarDeclarator> {
    declarators
        .iter()
        .map(|d| VarDeclarator {
            name: d.name.clone(),
            init: d.init.as_ref().map(|e| f.fold_expr(e)),
            span: d.span,
        })
        .collect()
}

pub fn fold_resource<F: Folder + ?Sized>(f: &mut F, resource: &Resource) -> Resource {
    match resource {
        Resource::Declaration {
            var_type,
            name,
            init,
        } => Resource::Declaration {
            var_type: var_type.clone(),
            name: name.clone(),
            init: f.fold_expr(init),
        },
        Resource::Expr(expr) => Resource::Expr(f.fold_expr(expr)),
    }
}

pub fn fold_catch<F: Folder + ?Sized>(f: &mut F, catch: &CatchClause) -> CatchClause {
    CatchClause {
        param: catch.param.clone(),
        types: catch.types.clone(),
        body: f.fold_block(&catch.body),
    }
}

pub fn fold_switch_arm<F: Folder + ?Sized>(f: &mut F, arm: &SwitchArm) -> SwitchArm {
    SwitchArm {
        labels: arm
            .labels
            .iter()
            .map(|label| match label {
                CaseLabel::Expr(expr) => CaseLabel::Expr(f.fold_expr(expr)),
                CaseLabel::Pattern { .. } => label.clone(),
            })
            .collect(),
        is_default: arm.is_default,
        guard: arm.guard.as_ref().map(|g| f.fold_expr(g)),
        body: arm.body.iter().map(|s| f.fold_stmt(s)).collect(),
    }
}

pub fn fold_switch<F: Folder + ?Sized>(f: &mut F, switch: &SwitchBlock) -> SwitchBlock {
    SwitchBlock {
        selector: f.fold_expr(&switch.selector),
        arms: switch.arms.iter().map(|arm| fold_switch_arm(f, arm)).collect(),
    }
}

pub fn fold_lambda_body<F: Folder + ?Sized>(f: &mut F, body: &LambdaBody) -> LambdaBody {
    match body {
        LambdaBody::Expr(expr) => LambdaBody::Expr(fold_box_expr(f, expr)),
        LambdaBody::Block(block) => LambdaBody::Block(f.fold_block(block)),
    }
}

pub fn fold_stmt_children<F: Folder + ?Sized>(f: &mut F, stmt: &Stmt) -> Stmt {
    let kind = match &stmt.kind {
        StmtKind::LocalVar {
            var_type,
            declarators,
        } => StmtKind::LocalVar {
            var_type: var_type.clone(),
            declarators: fold_declarators(f, declarators),
        },
        StmtKind::Expression(expr) => StmtKind::Expression(f.fold_expr(expr)),
        StmtKind::Block(block) => StmtKind::Block(f.fold_block(block)),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => StmtKind::If {
            condition: f.fold_expr(condition),
            then_branch: Box::new(f.fold_stmt(then_branch)),
            else_branch: else_branch.as_ref().map(|s| Box::new(f.fold_stmt(s))),
        },
        StmtKind::While { condition, body } => StmtKind::While {
            condition: f.fold_expr(condition),
            body: Box::new(f.fold_stmt(body)),
        },
        StmtKind::DoWhile { body, condition } => StmtKind::DoWhile {
            body: Box::new(f.fold_stmt(body)),
            condition: f.fold_expr(condition),
        },
        StmtKind::For {
            init,
            condition,
            update,
            body,
        } => StmtKind::For {
            init: init.iter().map(|s| f.fold_stmt(s)).collect(),
            condition: condition.as_ref().map(|c| f.fold_expr(c)),
            update: fold_exprs(f, update),
            body: Box::new(f.fold_stmt(body)),
        },
        StmtKind::ForEach {
            var_type,
            name,
            iterable,
            body,
        } => StmtKind::ForEach {
            var_type: var_type.clone(),
            name: name.clone(),
            iterable: f.fold_expr(iterable),
            body: Box::new(f.fold_stmt(body)),
        },
        StmtKind::Return(expr) => StmtKind::Return(expr.as_ref().map(|e| f.fold_expr(e))),
        StmtKind::Throw(expr) => StmtKind::Throw(f.fold_expr(expr)),
        StmtKind::Yield(expr) => StmtKind::Yield(f.fold_expr(expr)),
        StmtKind::Try {
            resources,
            body,
            catches,
            finally,
        } => StmtKind::Try {
            resources: resources.iter().map(|r| fold_resource(f, r)).collect(),
            body: f.fold_block(body),
            catches: catches.iter().map(|c| fold_catch(f, c)).collect(),
            finally: finally.as_ref().map(|b| f.fold_block(b)),
        },
        StmtKind::Switch(switch) => StmtKind::Switch(fold_switch(f, switch)),
        StmtKind::Synchronized { lock, body } => StmtKind::Synchronized {
            lock: f.fold_expr(lock),
            body: f.fold_block(body),
        },
        StmtKind::Labeled { label, body } => StmtKind::Labeled {
            label: label.clone(),
            body: Box::new(f.fold_stmt(body)),
        },
        StmtKind::Assert { condition, message } => StmtKind::Assert {
            condition: f.fold_expr(condition),
            message: message.as_ref().map(|m| f.fold_expr(m)),
        },
        StmtKind::Break(_)
        | StmtKind::Continue(_)
        | StmtKind::LocalClass(_)
        | StmtKind::Empty
        | StmtKind::Unsupported(_) => stmt.kind.clone(),
    };
    stmt.with_kind(kind)
}

pub fn fold_invocation<F: Folder + ?Sized>(f: &mut F, inv: &MethodInvocation) -> MethodInvocation {
    MethodInvocation {
        select: inv.select.as_ref().map(|s| f.fold_expr(s)),
        name: inv.name.clone(),
        args: fold_exprs(f, &inv.args),
        method: inv.method.clone(),
    }
}

pub fn fold_new_class<F: Folder + ?Sized>(f: &mut F, new: &NewClass) -> NewClass {
    NewClass {
        class_name: new.class_name.clone(),
        outer: new.outer.as_ref().map(|o| f.fold_expr(o)),
        args: fold_exprs(f, &new.args),
        has_body: new.has_body,
        captures_enclosing_instance: new.captures_enclosing_instance,
    }
}

pub fn fold_expr_children<F: Folder + ?Sized>(f: &mut F, expr: &Expr) -> Expr {
    let kind = match &expr.kind {
        ExprKind::Literal(_)
        | ExprKind::Name(_)
        | ExprKind::TypeName(_)
        | ExprKind::This
        | ExprKind::QualifiedThis(_)
        | ExprKind::Super
        | ExprKind::ClassLiteral(_)
        | ExprKind::Unsupported(_) => expr.kind.clone(),
        ExprKind::FieldAccess { target, field } => ExprKind::FieldAccess {
            target: fold_box_expr(f, target),
            field: field.clone(),
        },
        ExprKind::MethodInvocation(inv) => {
            ExprKind::MethodInvocation(Box::new(fold_invocation(f, inv)))
        }
        ExprKind::NewClass(new) => ExprKind::NewClass(Box::new(fold_new_class(f, new))),
        ExprKind::NewArray {
            element_type,
            dimensions,
            initializer,
        } => ExprKind::NewArray {
            element_type: element_type.clone(),
            dimensions: fold_exprs(f, dimensions),
            initializer: initializer.as_ref().map(|items| fold_exprs(f, items)),
        },
        ExprKind::ArrayInitializer(items) => ExprKind::ArrayInitializer(fold_exprs(f, items)),
        ExprKind::ArrayAccess { array, index } => ExprKind::ArrayAccess {
            array: fold_box_expr(f, array),
            index: fold_box_expr(f, index),
        },
        ExprKind::Assign {
            target,
            operator,
            value,
        } => ExprKind::Assign {
            target: fold_box_expr(f, target),
            operator: operator.clone(),
            value: fold_box_expr(f, value),
        },
        ExprKind::Binary { lhs, operator, rhs } => ExprKind::Binary {
            lhs: fold_box_expr(f, lhs),
            operator: operator.clone(),
            rhs: fold_box_expr(f, rhs),
        },
        ExprKind::Unary {
            operator,
            operand,
            postfix,
        } => ExprKind::Unary {
            operator: operator.clone(),
            operand: fold_box_expr(f, operand),
            postfix: *postfix,
        },
        ExprKind::Ternary {
            condition,
            then_expr,
            else_expr,
        } => ExprKind::Ternary {
            condition: fold_box_expr(f, condition),
            then_expr: fold_box_expr(f, then_expr),
            else_expr: fold_box_expr(f, else_expr),
        },
        ExprKind::Cast { target_type, expr } => ExprKind::Cast {
            target_type: target_type.clone(),
            expr: fold_box_expr(f, expr),
        },
        ExprKind::InstanceOf {
            expr,
            target_type,
            bindings,
        } => ExprKind::InstanceOf {
            expr: fold_box_expr(f, expr),
            target_type: target_type.clone(),
            bindings: bindings.clone(),
        },
        ExprKind::Lambda { params, body } => ExprKind::Lambda {
            params: params.clone(),
            body: fold_lambda_body(f, body),
        },
        ExprKind::MethodReference { target, name } => ExprKind::MethodReference {
            target: fold_box_expr(f, target),
            name: name.clone(),
        },
        ExprKind::Parenthesized(inner) => ExprKind::Parenthesized(fold_box_expr(f, inner)),
        ExprKind::Switch(switch) => ExprKind::Switch(Box::new(fold_switch(f, switch))),
    };
    expr.with_kind(kind)
}
