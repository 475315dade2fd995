//! Tree-sitter Utility Functions
//!
//! Common helpers for working with tree-sitter nodes during lowering.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// All named children, comments excluded
pub fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    children
}

/// All children (named and anonymous), comments excluded
pub fn all_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node
        .children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    children
}

/// All children stored under a field name
pub fn children_by_field<'a>(node: &Node<'a>, field: &str) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node.children_by_field_name(field, &mut cursor).collect();
    children
}

/// Find all descendants by kind (pre-order)
pub fn find_descendants_by_kind<'a>(node: &Node<'a>, kind: &str) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

/// First ERROR or MISSING node, if any
pub fn first_error<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    if !node.has_error() {
        return None;
    }
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// Text & Span
// ═══════════════════════════════════════════════════════════════════════════

/// Source text of a node
#[inline]
pub fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Source text of a field child, empty when absent
pub fn field_text<'s>(node: &Node, field: &str, source: &'s str) -> &'s str {
    node.child_by_field_name(field)
        .map(|child| node_text(&child, source))
        .unwrap_or("")
}

/// Convert node position to Span
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        node.start_byte(),
        node.end_byte(),
        start.row as u32 + 1,
        start.column as u32,
        end.row as u32 + 1,
        end.column as u32,
    )
}

/// Extension trait mirroring `node_to_span`
pub trait SpanExt {
    fn to_span(&self) -> Span;
}

impl SpanExt for Node<'_> {
    fn to_span(&self) -> Span {
        node_to_span(self)
    }
}
