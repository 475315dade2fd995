//! Rewrite → text edits
//!
//! A rewrite changes two kinds of nodes, both identified by node id:
//! the modifier list, and `this` expressions turned into type names.

use rustc_hash::FxHashMap;

use crate::features::source_edit::domain::TextEdit;
use crate::features::syntax_tree::visit::{walk_expr, Visitor};
use crate::features::syntax_tree::{Expr, ExprKind, MethodDeclaration};
use crate::shared::models::{NodeId, Span};

/// Edits turning the text of `original` into the text of `rewritten`,
/// sorted by position
pub fn edits_for_rewrite(original: &MethodDeclaration, rewritten: &MethodDeclaration) -> Vec<TextEdit> {
    let mut edits = Vec::new();

    if original.modifiers.items != rewritten.modifiers.items {
        let text = rewritten.modifiers.render();
        edits.push(match original.modifiers.span {
            Some(span) => TextEdit::replace(&span, text),
            None => TextEdit::insert(original.modifiers.anchor.start_byte, format!("{text} ")),
        });
    }

    if let (Some(before), Some(after)) = (&original.body, &rewritten.body) {
        let mut receivers = SelfReceivers::default();
        receivers.visit_block(before);

        let mut qualified = QualifiedReceivers {
            receivers: &receivers.spans,
            edits: &mut edits,
        };
        qualified.visit_block(after);
    }

    edits.sort_by_key(|edit| (edit.start, edit.end));
    edits
}

/// Spans of every `this` in the original body
#[derive(Default)]
struct SelfReceivers {
    spans: FxHashMap<NodeId, Span>,
}

impl Visitor for SelfReceivers {
    fn visit_expr(&mut self, expr: &Expr) {
        if expr.is_this() {
            self.spans.insert(expr.id, expr.span);
        }
        walk_expr(self, expr);
    }
}

struct QualifiedReceivers<'a> {
    receivers: &'a FxHashMap<NodeId, Span>,
    edits: &'a mut Vec<TextEdit>,
}

impl Visitor for QualifiedReceivers<'_> {
    fn visit_expr(&mut self, expr: &Expr) {
        if let ExprKind::TypeName(name) = &expr.kind {
            if let Some(span) = self.receivers.get(&expr.id) {
                self.edits.push(TextEdit::replace(span, name.as_str()));
            }
        }
        walk_expr(self, expr);
    }
}
