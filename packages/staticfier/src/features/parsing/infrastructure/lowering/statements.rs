//! Statement lowering

use tree_sitter::Node;

use crate::features::syntax_tree::{
    Block, CaseLabel, CatchClause, Expr, Resource, Stmt, StmtKind, SwitchArm, SwitchBlock,
    VarDeclarator,
};
use crate::shared::utils::{
    all_children, children_by_field, find_child_by_kind, find_descendants_by_kind, named_children,
    SpanExt,
};

use super::declarations::is_type_declaration;
use super::Lowerer;

impl<'s> Lowerer<'s> {
    pub(super) fn lower_block(&mut self, node: &Node) -> Block {
        let id = self.ids.next_node();
        let stmts = named_children(node)
            .iter()
            .map(|s| self.lower_stmt(s))
            .collect();
        Block::new(id, node.to_span(), stmts)
    }

    pub(super) fn lower_stmt(&mut self, node: &Node) -> Stmt {
        let id = self.ids.next_node();
        let kind = self
            .nested(|this| this.lower_stmt_kind(node))
            .unwrap_or_else(|| StmtKind::Unsupported(Self::too_deep(node)));
        Stmt::new(id, node.to_span(), kind)
    }

    fn lower_stmt_kind(&mut self, node: &Node) -> StmtKind {
        match node.kind() {
            "block" => StmtKind::Block(self.lower_block(node)),
            "local_variable_declaration" => StmtKind::LocalVar {
                var_type: self.field(node, "type").to_string(),
                declarators: self.lower_declarators(node),
            },
            "expression_statement" => match named_children(node).first() {
                Some(expr) => StmtKind::Expression(self.lower_expr(expr)),
                None => StmtKind::Empty,
            },
            "if_statement" => StmtKind::If {
                condition: self.expr_field(node, "condition"),
                then_branch: Box::new(self.stmt_field(node, "consequence")),
                else_branch: node
                    .child_by_field_name("alternative")
                    .map(|s| Box::new(self.lower_stmt(&s))),
            },
            "while_statement" => StmtKind::While {
                condition: self.expr_field(node, "condition"),
                body: Box::new(self.stmt_field(node, "body")),
            },
            "do_statement" => StmtKind::DoWhile {
                body: Box::new(self.stmt_field(node, "body")),
                condition: self.expr_field(node, "condition"),
            },
            "for_statement" => self.lower_for(node),
            "enhanced_for_statement" => StmtKind::ForEach {
                var_type: self.field(node, "type").to_string(),
                name: self.field(node, "name").to_string(),
                iterable: self.expr_field(node, "value"),
                body: Box::new(self.stmt_field(node, "body")),
            },
            "return_statement" => {
                StmtKind::Return(named_children(node).first().map(|e| self.lower_expr(e)))
            }
            "throw_statement" => StmtKind::Throw(self.first_expr(node)),
            "yield_statement" => StmtKind::Yield(self.first_expr(node)),
            "break_statement" => StmtKind::Break(self.label_of(node)),
            "continue_statement" => StmtKind::Continue(self.label_of(node)),
            "try_statement" | "try_with_resources_statement" => self.lower_try(node),
            "switch_expression" => StmtKind::Switch(self.lower_switch(node)),
            "synchronized_statement" => StmtKind::Synchronized {
                lock: match find_child_by_kind(node, "parenthesized_expression") {
                    Some(lock) => self.lower_expr(&lock),
                    None => self.missing_expr(node, "lock"),
                },
                body: match node.child_by_field_name("body") {
                    Some(body) => self.lower_block(&body),
                    None => Block::new(self.ids.next_node(), node.to_span(), Vec::new()),
                },
            },
            "labeled_statement" => {
                let children = named_children(node);
                let label = children
                    .first()
                    .map(|l| self.text(l).to_string())
                    .unwrap_or_default();
                let body = match children.get(1) {
                    Some(body) => self.lower_stmt(body),
                    None => self.missing_stmt(node, "labeled body"),
                };
                StmtKind::Labeled {
                    label,
                    body: Box::new(body),
                }
            }
            "assert_statement" => {
                let children = named_children(node);
                StmtKind::Assert {
                    condition: match children.first() {
                        Some(c) => self.lower_expr(c),
                        None => self.missing_expr(node, "assertion"),
                    },
                    message: children.get(1).map(|m| self.lower_expr(m)),
                }
            }
            kind if is_type_declaration(kind) => {
                StmtKind::LocalClass(self.field(node, "name").to_string())
            }
            other => StmtKind::Unsupported(other.to_string()),
        }
    }

    fn first_expr(&mut self, node: &Node) -> Expr {
        match named_children(node).first() {
            Some(expr) => self.lower_expr(expr),
            None => self.missing_expr(node, "expression"),
        }
    }

    fn label_of(&self, node: &Node) -> Option<String> {
        find_child_by_kind(node, "identifier").map(|l| self.text(&l).to_string())
    }

    fn lower_declarators(&mut self, node: &Node) -> Vec<VarDeclarator> {
        children_by_field(node, "declarator")
            .iter()
            .map(|d| VarDeclarator {
                name: self.field(d, "name").to_string(),
                init: d.child_by_field_name("value").map(|v| self.lower_expr(&v)),
                span: d.to_span(),
            })
            .collect()
    }

    fn lower_for(&mut self, node: &Node) -> StmtKind {
        let init: Vec<Stmt> = children_by_field(node, "init")
            .iter()
            .map(|i| {
                if i.kind() == "local_variable_declaration" {
                    self.lower_stmt(i)
                } else {
                    let id = self.ids.next_node();
                    let expr = self.lower_expr(i);
                    Stmt::new(id, i.to_span(), StmtKind::Expression(expr))
                }
            })
            .collect();
        let condition = node
            .child_by_field_name("condition")
            .map(|c| self.lower_expr(&c));
        let update: Vec<Expr> = children_by_field(node, "update")
            .iter()
            .map(|u| self.lower_expr(u))
            .collect();
        StmtKind::For {
            init,
            condition,
            update,
            body: Box::new(self.stmt_field(node, "body")),
        }
    }

    fn lower_try(&mut self, node: &Node) -> StmtKind {
        let resources: Vec<Resource> = node
            .child_by_field_name("resources")
            .map(|spec| {
                named_children(&spec)
                    .iter()
                    .filter(|r| r.kind() == "resource")
                    .map(|r| self.lower_resource(r))
                    .collect()
            })
            .unwrap_or_default();
        let body = match node.child_by_field_name("body") {
            Some(body) => self.lower_block(&body),
            None => Block::new(self.ids.next_node(), node.to_span(), Vec::new()),
        };

        let mut catches = Vec::new();
        let mut finally = None;
        for child in named_children(node) {
            match child.kind() {
                "catch_clause" => catches.push(self.lower_catch(&child)),
                "finally_clause" => {
                    finally = find_child_by_kind(&child, "block").map(|b| self.lower_block(&b));
                }
                _ => {}
            }
        }

        StmtKind::Try {
            resources,
            body,
            catches,
            finally,
        }
    }

    fn lower_resource(&mut self, node: &Node) -> Resource {
        if node.child_by_field_name("name").is_some() {
            Resource::Declaration {
                var_type: self.field(node, "type").to_string(),
                name: self.field(node, "name").to_string(),
                init: self.expr_field(node, "value"),
            }
        } else {
            Resource::Expr(self.first_expr(node))
        }
    }

    fn lower_catch(&mut self, node: &Node) -> CatchClause {
        let param = find_child_by_kind(node, "catch_formal_parameter");
        let name = param
            .map(|p| self.field(&p, "name").to_string())
            .unwrap_or_default();
        let types: Vec<String> = param
            .and_then(|p| find_child_by_kind(&p, "catch_type"))
            .map(|t| {
                named_children(&t)
                    .iter()
                    .map(|ty| self.text(ty).to_string())
                    .collect()
            })
            .unwrap_or_default();
        let body = match node.child_by_field_name("body") {
            Some(body) => self.lower_block(&body),
            None => Block::new(self.ids.next_node(), node.to_span(), Vec::new()),
        };
        CatchClause {
            param: name,
            types,
            body,
        }
    }

    /// `switch` used as a statement or as an expression
    pub(super) fn lower_switch(&mut self, node: &Node) -> SwitchBlock {
        let selector = self.expr_field(node, "condition");
        let mut arms = Vec::new();
        if let Some(block) = node.child_by_field_name("body") {
            for group in named_children(&block) {
                match group.kind() {
                    "switch_block_statement_group" | "switch_rule" => {
                        arms.push(self.lower_switch_arm(&group))
                    }
                    _ => {}
                }
            }
        }
        SwitchBlock { selector, arms }
    }

    fn lower_switch_arm(&mut self, node: &Node) -> SwitchArm {
        let mut arm = SwitchArm {
            labels: Vec::new(),
            is_default: false,
            guard: None,
            body: Vec::new(),
        };
        for child in named_children(node) {
            if child.kind() == "switch_label" {
                self.lower_switch_label(&child, &mut arm);
            } else {
                let stmt = self.lower_stmt(&child);
                arm.body.push(stmt);
            }
        }
        arm
    }

    fn lower_switch_label(&mut self, label: &Node, arm: &mut SwitchArm) {
        if all_children(label).iter().any(|c| c.kind() == "default") {
            arm.is_default = true;
        }
        for child in named_children(label) {
            match child.kind() {
                "pattern" | "type_pattern" | "record_pattern" => {
                    let bindings: Vec<String> = find_descendants_by_kind(&child, "identifier")
                        .iter()
                        .map(|b| self.text(b).to_string())
                        .collect();
                    arm.labels.push(CaseLabel::Pattern {
                        pattern_type: self.text(&child).to_string(),
                        bindings,
                    });
                }
                "guard" => {
                    arm.guard = named_children(&child).first().map(|g| self.lower_expr(g));
                }
                _ => {
                    let expr = self.lower_expr(&child);
                    arm.labels.push(CaseLabel::Expr(expr));
                }
            }
        }
    }
}
