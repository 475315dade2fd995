//! Method body resolution
//!
//! A `Folder` that rebuilds one method body with every name, field access
//! and invocation resolved against the unit's `SymbolTable`. Locals are
//! tracked with a `ScopeStack`; anything the table cannot account for stays
//! `Unresolved`.

use crate::features::syntax_tree::fold::{
    fold_block_children, fold_expr_children, fold_stmt_children,
};
use crate::features::syntax_tree::{
    Block, CaseLabel, CatchClause, Expr, ExprKind, FieldRef, Folder, Identifier, LambdaBody,
    MethodDeclaration, MethodInvocation, MethodRef, NewClass, Owner, Resolution, Resource, Stmt,
    StmtKind, SwitchArm, SwitchBlock, VarDeclarator,
};
use crate::features::type_resolution::domain::{
    is_constant_name, is_upper_camel, simple_type_name, Lookup, SymbolTable,
};
use crate::shared::models::TypeId;
use crate::shared::utils::{LocalKind, ScopeStack};

pub struct BodyResolver<'t> {
    table: &'t SymbolTable,
    current: TypeId,
    receivers: Vec<TypeId>,
    scopes: ScopeStack,
}

impl<'t> BodyResolver<'t> {
    pub fn new(table: &'t SymbolTable, current: TypeId) -> Self {
        Self {
            table,
            current,
            receivers: table.implicit_receiver_types(current),
            scopes: ScopeStack::new(),
        }
    }

    /// Resolved copy of `method`, with its own identity attached
    pub fn resolve_method(&mut self, method: &MethodDeclaration) -> MethodDeclaration {
        self.scopes.clear();
        for param in &method.parameters {
            self.scopes.declare(param.name.as_str(), LocalKind::Parameter);
        }
        let body = method.body.as_ref().map(|b| self.fold_block(b));
        let method_ref = self.table.method_id(method.id).map(|id| MethodRef {
            id: Some(id),
            owner: Owner::Unit(method.declaring_type.id),
            name: method.name.clone(),
            is_static: method.is_static(),
        });
        MethodDeclaration {
            body,
            method_ref,
            ..method.clone()
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Names
    // ═══════════════════════════════════════════════════════════════════════

    fn resolve_value_name(&self, name: &str) -> Resolution {
        match self.scopes.lookup(name) {
            // a binding that shadows a field may be out of flow scope here
            Some(LocalKind::PatternBinding) => match self.table.lookup_field(self.current, name) {
                Lookup::Absent => Resolution::Local,
                Lookup::Found(_) | Lookup::Opaque => Resolution::Unresolved,
            },
            Some(_) => Resolution::Local,
            None => match self.table.lookup_field(self.current, name) {
                Lookup::Found(field) => Resolution::Field(field),
                Lookup::Opaque => Resolution::Unresolved,
                Lookup::Absent => self.imported_field(name),
            },
        }
    }

    /// A name nothing in the unit declares can only come from a static import
    fn imported_field(&self, name: &str) -> Resolution {
        let owner = self
            .table
            .static_import(name)
            .or_else(|| self.table.static_wildcard_import());
        match owner {
            Some(owner) => Resolution::Field(FieldRef {
                owner,
                name: name.to_string(),
                is_static: true,
            }),
            None => Resolution::Unresolved,
        }
    }

    /// Names in qualifier position may also be types or package roots
    fn resolve_receiver_name(&self, name: &str) -> Resolution {
        let value = self.resolve_value_name(name);
        if value.is_resolved() || self.scopes.contains(name) {
            return value;
        }
        if let Some(owner) = self.table.find_type(name, self.current) {
            return Resolution::Type(owner);
        }
        if self.table.is_package_root(name) || is_upper_camel(name) {
            return Resolution::Type(Owner::External(name.to_string()));
        }
        if is_constant_name(name) && self.table.lookup_field(self.current, name).is_absent() {
            return Resolution::Type(Owner::External(name.to_string()));
        }
        Resolution::Unresolved
    }

    fn resolve_case_name(&self, name: &str) -> Resolution {
        match self.resolve_value_name(name) {
            resolved @ (Resolution::Local | Resolution::Field(_)) => resolved,
            _ => Resolution::EnumConstant,
        }
    }

    fn fold_receiver(&mut self, expr: &Expr) -> Expr {
        match &expr.kind {
            ExprKind::Name(id) => expr.with_kind(ExprKind::Name(Identifier::resolved(
                id.name.as_str(),
                self.resolve_receiver_name(&id.name),
            ))),
            _ => self.fold_expr(expr),
        }
    }

    /// Type named by a (resolved) qualifier expression
    fn type_of_qualifier(&self, expr: &Expr) -> Option<Owner> {
        match &expr.kind {
            ExprKind::Name(id) | ExprKind::FieldAccess { field: id, .. } => match &id.resolution {
                Resolution::Type(owner) => Some(owner.clone()),
                _ => None,
            },
            ExprKind::TypeName(text) => Some(
                self.table
                    .find_type(simple_type_name(text), self.current)
                    .unwrap_or_else(|| Owner::External(text.clone())),
            ),
            _ => None,
        }
    }

    /// Member `name` selected from a type
    fn member_of_type(&self, owner: &Owner, name: &str) -> Resolution {
        match owner {
            Owner::Unit(id) => {
                if let Some(nested) = self.table.member_type(*id, name) {
                    return Resolution::Type(Owner::Unit(nested));
                }
                match self.table.lookup_field_in(*id, name) {
                    Lookup::Found(field) => Resolution::Field(field),
                    Lookup::Opaque | Lookup::Absent => Resolution::Field(FieldRef {
                        owner: owner.clone(),
                        name: name.to_string(),
                        is_static: true,
                    }),
                }
            }
            Owner::External(path) => {
                if is_upper_camel(name) || self.is_package_path(path) {
                    Resolution::Type(Owner::External(format!("{path}.{name}")))
                } else {
                    Resolution::Field(FieldRef {
                        owner: owner.clone(),
                        name: name.to_string(),
                        is_static: true,
                    })
                }
            }
        }
    }

    /// `java`, `java.util`: a package root followed by lower-case segments
    fn is_package_path(&self, path: &str) -> bool {
        let mut segments = path.split('.');
        segments
            .next()
            .map_or(false, |root| self.table.is_package_root(root))
            && segments.all(|s| s.chars().next().map_or(false, |c| c.is_ascii_lowercase()))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Expressions
    // ═══════════════════════════════════════════════════════════════════════

    fn resolve_field_access(&mut self, expr: &Expr, target: &Expr, field: &Identifier) -> Expr {
        let target = self.fold_receiver(target);
        let resolution = if target.is_this() {
            match self.table.lookup_field_in(self.current, &field.name) {
                Lookup::Found(found) => Resolution::Field(found),
                Lookup::Opaque | Lookup::Absent => Resolution::Unresolved,
            }
        } else {
            match self.type_of_qualifier(&target) {
                Some(owner) => self.member_of_type(&owner, &field.name),
                None => Resolution::Unresolved,
            }
        };
        expr.with_kind(ExprKind::FieldAccess {
            target: Box::new(target),
            field: Identifier::resolved(field.name.as_str(), resolution),
        })
    }

    fn resolve_invocation(&mut self, inv: &MethodInvocation) -> MethodInvocation {
        let select = inv.select.as_ref().map(|s| self.fold_receiver(s));
        let args: Vec<Expr> = inv.args.iter().map(|a| self.fold_expr(a)).collect();
        let arity = args.len();

        let method = match &select {
            None => self
                .table
                .resolve_unqualified_call(self.current, &inv.name, arity),
            Some(s) if s.is_this() => self.table.resolve_self_call(self.current, &inv.name, arity),
            Some(s) => match self.type_of_qualifier(s) {
                Some(Owner::Unit(id)) => {
                    Some(self.table.resolve_type_qualified_call(id, &inv.name, arity))
                }
                Some(owner @ Owner::External(_)) => Some(MethodRef {
                    id: None,
                    owner,
                    name: inv.name.clone(),
                    is_static: true,
                }),
                None => None,
            },
        };

        MethodInvocation {
            select,
            name: inv.name.clone(),
            args,
            method,
        }
    }

    fn resolve_new_class(&mut self, new: &NewClass) -> NewClass {
        let outer = new.outer.as_ref().map(|o| self.fold_expr(o));
        let args = new.args.iter().map(|a| self.fold_expr(a)).collect();
        let created = self
            .table
            .find_type(simple_type_name(&new.class_name), self.current)
            .and_then(|owner| owner.unit_type())
            .and_then(|id| self.table.get(id));
        let captures_enclosing_instance = outer.is_none()
            && created.map_or(false, |t| {
                t.is_inner && t.outer.map_or(false, |o| self.receivers.contains(&o))
            });
        NewClass {
            class_name: new.class_name.clone(),
            outer,
            args,
            has_body: new.has_body,
            captures_enclosing_instance,
        }
    }

    fn resolve_lambda(&mut self, params: &[String], body: &LambdaBody) -> LambdaBody {
        self.scopes.push();
        for param in params {
            self.scopes.declare(param.as_str(), LocalKind::Parameter);
        }
        let body = match body {
            LambdaBody::Expr(expr) => LambdaBody::Expr(Box::new(self.fold_expr(expr))),
            LambdaBody::Block(block) => LambdaBody::Block(self.fold_block(block)),
        };
        self.scopes.pop();
        body
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Statements
    // ═══════════════════════════════════════════════════════════════════════

    fn resolve_declarators(&mut self, declarators: &[VarDeclarator]) -> Vec<VarDeclarator> {
        declarators
            .iter()
            .map(|d| {
                let init = d.init.as_ref().map(|e| self.fold_expr(e));
                self.scopes.declare(d.name.as_str(), LocalKind::Variable);
                VarDeclarator {
                    name: d.name.clone(),
                    init,
                    span: d.span,
                }
            })
            .collect()
    }

    fn resolve_try(
        &mut self,
        resources: &[Resource],
        body: &Block,
        catches: &[CatchClause],
        finally: &Option<Block>,
    ) -> StmtKind {
        self.scopes.push();
        let resources = resources
            .iter()
            .map(|r| match r {
                Resource::Declaration {
                    var_type,
                    name,
                    init,
                } => {
                    let init = self.fold_expr(init);
                    self.scopes.declare(name.as_str(), LocalKind::Variable);
                    Resource::Declaration {
                        var_type: var_type.clone(),
                        name: name.clone(),
                        init,
                    }
                }
                Resource::Expr(expr) => Resource::Expr(self.fold_expr(expr)),
            })
            .collect();
        let body = self.fold_block(body);
        self.scopes.pop();

        let catches = catches
            .iter()
            .map(|c| {
                self.scopes.push();
                self.scopes.declare(c.param.as_str(), LocalKind::Variable);
                let body = self.fold_block(&c.body);
                self.scopes.pop();
                CatchClause {
                    param: c.param.clone(),
                    types: c.types.clone(),
                    body,
                }
            })
            .collect();
        let finally = finally.as_ref().map(|b| self.fold_block(b));

        StmtKind::Try {
            resources,
            body,
            catches,
            finally,
        }
    }

    fn resolve_switch(&mut self, switch: &SwitchBlock) -> SwitchBlock {
        let selector = self.fold_expr(&switch.selector);
        self.scopes.push();
        let arms = switch.arms.iter().map(|arm| self.resolve_arm(arm)).collect();
        self.scopes.pop();
        SwitchBlock { selector, arms }
    }

    fn resolve_arm(&mut self, arm: &SwitchArm) -> SwitchArm {
        let bindings: Vec<&String> = arm
            .labels
            .iter()
            .flat_map(|label| match label {
                CaseLabel::Pattern { bindings, .. } => bindings.iter().collect::<Vec<_>>(),
                CaseLabel::Expr(_) => Vec::new(),
            })
            .collect();
        let scoped = !bindings.is_empty();
        if scoped {
            self.scopes.push();
            for binding in bindings {
                self.scopes.declare(binding.as_str(), LocalKind::PatternBinding);
            }
        }

        let labels = arm
            .labels
            .iter()
            .map(|label| match label {
                CaseLabel::Expr(expr) => CaseLabel::Expr(match &expr.kind {
                    ExprKind::Name(id) => expr.with_kind(ExprKind::Name(Identifier::resolved(
                        id.name.as_str(),
                        self.resolve_case_name(&id.name),
                    ))),
                    _ => self.fold_expr(expr),
                }),
                CaseLabel::Pattern { .. } => label.clone(),
            })
            .collect();
        let guard = arm.guard.as_ref().map(|g| self.fold_expr(g));
        let body = arm.body.iter().map(|s| self.fold_stmt(s)).collect();

        if scoped {
            self.scopes.pop();
        }
        SwitchArm {
            labels,
            is_default: arm.is_default,
            guard,
            body,
        }
    }
}

impl Folder for BodyResolver<'_> {
    fn fold_block(&mut self, block: &Block) -> Block {
        self.scopes.push();
        let folded = fold_block_children(self, block);
        self.scopes.pop();
        folded
    }

    fn fold_stmt(&mut self, stmt: &Stmt) -> Stmt {
        let kind = match &stmt.kind {
            StmtKind::LocalVar {
                var_type,
                declarators,
            } => StmtKind::LocalVar {
                var_type: var_type.clone(),
                declarators: self.resolve_declarators(declarators),
            },
            StmtKind::For {
                init,
                condition,
                update,
                body,
            } => {
                self.scopes.push();
                let kind = StmtKind::For {
                    init: init.iter().map(|s| self.fold_stmt(s)).collect(),
                    condition: condition.as_ref().map(|c| self.fold_expr(c)),
                    update: update.iter().map(|u| self.fold_expr(u)).collect(),
                    body: Box::new(self.fold_stmt(body)),
                };
                self.scopes.pop();
                kind
            }
            StmtKind::ForEach {
                var_type,
                name,
                iterable,
                body,
            } => {
                let iterable = self.fold_expr(iterable);
                self.scopes.push();
                self.scopes.declare(name.as_str(), LocalKind::Variable);
                let body = Box::new(self.fold_stmt(body));
                self.scopes.pop();
                StmtKind::ForEach {
                    var_type: var_type.clone(),
                    name: name.clone(),
                    iterable,
                    body,
                }
            }
            StmtKind::Try {
                resources,
                body,
                catches,
                finally,
            } => self.resolve_try(resources, body, catches, finally),
            StmtKind::Switch(switch) => StmtKind::Switch(self.resolve_switch(switch)),
            _ => return fold_stmt_children(self, stmt),
        };
        stmt.with_kind(kind)
    }

    fn fold_expr(&mut self, expr: &Expr) -> Expr {
        match &expr.kind {
            ExprKind::Name(id) => expr.with_kind(ExprKind::Name(Identifier::resolved(
                id.name.as_str(),
                self.resolve_value_name(&id.name),
            ))),
            ExprKind::FieldAccess { target, field } => {
                self.resolve_field_access(expr, target, field)
            }
            ExprKind::MethodInvocation(inv) => {
                expr.with_kind(ExprKind::MethodInvocation(Box::new(self.resolve_invocation(inv))))
            }
            ExprKind::NewClass(new) => {
                expr.with_kind(ExprKind::NewClass(Box::new(self.resolve_new_class(new))))
            }
            ExprKind::Lambda { params, body } => expr.with_kind(ExprKind::Lambda {
                params: params.clone(),
                body: self.resolve_lambda(params, body),
            }),
            ExprKind::InstanceOf {
                expr: operand,
                target_type,
                bindings,
            } => {
                let operand = self.fold_expr(operand);
                for binding in bindings {
                    self.scopes.declare(binding.as_str(), LocalKind::PatternBinding);
                }
                expr.with_kind(ExprKind::InstanceOf {
                    expr: Box::new(operand),
                    target_type: target_type.clone(),
                    bindings: bindings.clone(),
                })
            }
            ExprKind::MethodReference { target, name } => {
                expr.with_kind(ExprKind::MethodReference {
                    target: Box::new(self.fold_receiver(target)),
                    name: name.clone(),
                })
            }
            ExprKind::Switch(switch) => {
                expr.with_kind(ExprKind::Switch(Box::new(self.resolve_switch(switch))))
            }
            _ => fold_expr_children(self, expr),
        }
    }
}
