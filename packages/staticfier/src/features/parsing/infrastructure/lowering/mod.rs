//! Lowering from tree-sitter-java nodes to the syntax tree
//!
//! Lowering never fails: node kinds without a counterpart become
//! `Unsupported` statements or expressions, which every analysis treats
//! conservatively. Trees with syntax errors are rejected before lowering.
//!
//! Every later pass walks the lowered tree recursively, so statements and
//! expressions nested deeper than `MAX_NESTING` are cut off here and
//! become `Unsupported` as well.

mod declarations;
mod expressions;
mod statements;

use tree_sitter::Node;

use crate::features::syntax_tree::{Expr, ExprKind, Modifier, ModifierKind, ModifierList, Stmt, StmtKind};
use crate::shared::models::Span;
use crate::shared::utils::{all_children, field_text, find_child_by_kind, node_text, IdGenerator, SpanExt};

/// Statement and expression nesting kept by lowering
pub const MAX_NESTING: usize = 128;

/// Builds one `CompilationUnit` from one parse tree
pub struct Lowerer<'s> {
    source: &'s str,
    ids: IdGenerator,
    depth: usize,
}

impl<'s> Lowerer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            ids: IdGenerator::new(),
            depth: 0,
        }
    }

    /// Run `lower` one nesting level deeper; `None` past `MAX_NESTING`
    fn nested<T>(&mut self, lower: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= MAX_NESTING {
            return None;
        }
        self.depth += 1;
        let lowered = lower(self);
        self.depth -= 1;
        Some(lowered)
    }

    fn too_deep(node: &Node) -> String {
        format!("{} nested deeper than {}", node.kind(), MAX_NESTING)
    }

    fn text(&self, node: &Node) -> &'s str {
        node_text(node, self.source)
    }

    fn field(&self, node: &Node, name: &str) -> &'s str {
        field_text(node, name, self.source)
    }

    /// Empty span at the end of `node`, for children the grammar made optional
    fn end_point(node: &Node) -> Span {
        let pos = node.end_position();
        Span::point(node.end_byte(), pos.row as u32 + 1, pos.column as u32)
    }

    fn missing_expr(&mut self, parent: &Node, what: &str) -> Expr {
        Expr::new(
            self.ids.next_node(),
            Self::end_point(parent),
            ExprKind::Unsupported(format!("missing {what}")),
        )
    }

    fn missing_stmt(&mut self, parent: &Node, what: &str) -> Stmt {
        Stmt::new(
            self.ids.next_node(),
            Self::end_point(parent),
            StmtKind::Unsupported(format!("missing {what}")),
        )
    }

    fn expr_field(&mut self, node: &Node, field: &str) -> Expr {
        match node.child_by_field_name(field) {
            Some(child) => self.lower_expr(&child),
            None => self.missing_expr(node, field),
        }
    }

    fn stmt_field(&mut self, node: &Node, field: &str) -> Stmt {
        match node.child_by_field_name(field) {
            Some(child) => self.lower_stmt(&child),
            None => self.missing_stmt(node, field),
        }
    }

    /// Modifier tokens of a declaration, with the exact text between them
    fn lower_modifiers(&mut self, decl: &Node) -> ModifierList {
        let start = decl.start_position();
        let anchor = Span::point(decl.start_byte(), start.row as u32 + 1, start.column as u32);
        let Some(modifiers) = find_child_by_kind(decl, "modifiers") else {
            return ModifierList::empty(anchor);
        };

        let mut items: Vec<Modifier> = Vec::new();
        let mut prev_end: Option<usize> = None;
        for child in all_children(&modifiers) {
            let text = self.text(&child);
            let kind = match child.kind() {
                "marker_annotation" | "annotation" => ModifierKind::Annotation,
                _ => match ModifierKind::from_keyword(text) {
                    Some(kind) => kind,
                    None => continue,
                },
            };
            let prefix = prev_end
                .and_then(|end| self.source.get(end..child.start_byte()))
                .unwrap_or("");
            items.push(Modifier::parsed(
                self.ids.next_node(),
                kind,
                text,
                prefix,
                child.to_span(),
            ));
            prev_end = Some(child.end_byte());
        }

        let span = match (items.first().and_then(|m| m.span), items.last().and_then(|m| m.span)) {
            (Some(first), Some(last)) => Some(Span::new(
                first.start_byte,
                last.end_byte,
                first.start_line,
                first.start_col,
                last.end_line,
                last.end_col,
            )),
            _ => None,
        };
        ModifierList::new(items, span, anchor)
    }
}
