//! Expression lowering

use tree_sitter::Node;

use crate::features::syntax_tree::{Expr, ExprKind, Identifier, LambdaBody, MethodInvocation, NewClass};
use crate::shared::utils::{
    all_children, children_by_field, find_child_by_kind, find_descendants_by_kind, named_children,
    SpanExt,
};

use super::Lowerer;

fn is_literal(kind: &str) -> bool {
    matches!(
        kind,
        "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal"
            | "decimal_floating_point_literal"
            | "hex_floating_point_literal"
            | "true"
            | "false"
            | "character_literal"
            | "string_literal"
            | "text_block"
            | "null_literal"
    )
}

/// Type nodes that can stand where an expression is expected
/// (`String[]::new`, `List<T>::size`)
fn is_type_node(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier"
            | "scoped_type_identifier"
            | "generic_type"
            | "array_type"
            | "integral_type"
            | "floating_point_type"
            | "boolean_type"
            | "void_type"
    )
}

impl<'s> Lowerer<'s> {
    pub(super) fn lower_expr(&mut self, node: &Node) -> Expr {
        let id = self.ids.next_node();
        let kind = self
            .nested(|this| this.lower_expr_kind(node))
            .unwrap_or_else(|| ExprKind::Unsupported(Self::too_deep(node)));
        Expr::new(id, node.to_span(), kind)
    }

    fn lower_expr_kind(&mut self, node: &Node) -> ExprKind {
        match node.kind() {
            "identifier" => ExprKind::Name(Identifier::unresolved(self.text(node))),
            "this" => ExprKind::This,
            "super" => ExprKind::Super,
            kind if is_literal(kind) => ExprKind::Literal(self.text(node).to_string()),
            kind if is_type_node(kind) => ExprKind::TypeName(self.text(node).to_string()),
            "parenthesized_expression" => {
                let inner = match named_children(node).first() {
                    Some(inner) => self.lower_expr(inner),
                    None => self.missing_expr(node, "expression"),
                };
                ExprKind::Parenthesized(Box::new(inner))
            }
            "field_access" => self.lower_field_access(node),
            "method_invocation" => self.lower_invocation(node),
            "object_creation_expression" => self.lower_new_class(node),
            "array_creation_expression" => self.lower_new_array(node),
            "array_initializer" => ExprKind::ArrayInitializer(self.lower_all(node)),
            "array_access" => ExprKind::ArrayAccess {
                array: Box::new(self.expr_field(node, "array")),
                index: Box::new(self.expr_field(node, "index")),
            },
            "assignment_expression" => ExprKind::Assign {
                target: Box::new(self.expr_field(node, "left")),
                operator: self.field(node, "operator").to_string(),
                value: Box::new(self.expr_field(node, "right")),
            },
            "binary_expression" => ExprKind::Binary {
                lhs: Box::new(self.expr_field(node, "left")),
                operator: self.field(node, "operator").to_string(),
                rhs: Box::new(self.expr_field(node, "right")),
            },
            "unary_expression" => ExprKind::Unary {
                operator: self.field(node, "operator").to_string(),
                operand: Box::new(self.expr_field(node, "operand")),
                postfix: false,
            },
            "update_expression" => self.lower_update(node),
            "ternary_expression" => ExprKind::Ternary {
                condition: Box::new(self.expr_field(node, "condition")),
                then_expr: Box::new(self.expr_field(node, "consequence")),
                else_expr: Box::new(self.expr_field(node, "alternative")),
            },
            "cast_expression" => ExprKind::Cast {
                target_type: children_by_field(node, "type")
                    .iter()
                    .map(|t| self.text(t))
                    .collect::<Vec<_>>()
                    .join(" & "),
                expr: Box::new(self.expr_field(node, "value")),
            },
            "instanceof_expression" => self.lower_instanceof(node),
            "lambda_expression" => self.lower_lambda(node),
            "method_reference" => self.lower_method_reference(node),
            "class_literal" => ExprKind::ClassLiteral(
                named_children(node)
                    .first()
                    .map(|t| self.text(t).to_string())
                    .unwrap_or_default(),
            ),
            "switch_expression" => ExprKind::Switch(Box::new(self.lower_switch(node))),
            other => ExprKind::Unsupported(other.to_string()),
        }
    }

    fn lower_all(&mut self, node: &Node) -> Vec<Expr> {
        named_children(node)
            .iter()
            .map(|e| self.lower_expr(e))
            .collect()
    }

    /// `super` appearing between the object and the member (`Outer.super.x`)
    fn qualified_super<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        let object_start = node.child_by_field_name("object").map(|o| o.start_byte());
        all_children(node)
            .into_iter()
            .find(|c| c.kind() == "super" && Some(c.start_byte()) != object_start)
    }

    fn lower_field_access(&mut self, node: &Node) -> ExprKind {
        let Some(field) = node.child_by_field_name("field") else {
            return ExprKind::Unsupported("field_access".to_string());
        };
        if field.kind() == "this" {
            return ExprKind::QualifiedThis(self.field(node, "object").to_string());
        }
        let target = match Self::qualified_super(node) {
            Some(sup) => Expr::new(self.ids.next_node(), sup.to_span(), ExprKind::Super),
            None => self.expr_field(node, "object"),
        };
        ExprKind::FieldAccess {
            target: Box::new(target),
            field: Identifier::unresolved(self.text(&field)),
        }
    }

    fn lower_invocation(&mut self, node: &Node) -> ExprKind {
        let select = match Self::qualified_super(node) {
            Some(sup) => Some(Expr::new(self.ids.next_node(), sup.to_span(), ExprKind::Super)),
            None => node.child_by_field_name("object").map(|o| self.lower_expr(&o)),
        };
        let args = node
            .child_by_field_name("arguments")
            .map(|a| self.lower_all(&a))
            .unwrap_or_default();
        ExprKind::MethodInvocation(Box::new(MethodInvocation {
            select,
            name: self.field(node, "name").to_string(),
            args,
            method: None,
        }))
    }

    fn lower_new_class(&mut self, node: &Node) -> ExprKind {
        let Some(type_node) = node.child_by_field_name("type") else {
            return ExprKind::Unsupported("object_creation_expression".to_string());
        };
        let outer = named_children(node)
            .into_iter()
            .find(|c| {
                c.end_byte() <= type_node.start_byte()
                    && !matches!(c.kind(), "type_arguments" | "marker_annotation" | "annotation")
            })
            .map(|o| self.lower_expr(&o));
        let args = node
            .child_by_field_name("arguments")
            .map(|a| self.lower_all(&a))
            .unwrap_or_default();
        ExprKind::NewClass(Box::new(NewClass {
            class_name: self.text(&type_node).to_string(),
            outer,
            args,
            has_body: find_child_by_kind(node, "class_body").is_some(),
            captures_enclosing_instance: false,
        }))
    }

    fn lower_new_array(&mut self, node: &Node) -> ExprKind {
        let dimensions: Vec<Expr> = children_by_field(node, "dimensions")
            .iter()
            .filter(|d| d.kind() == "dimensions_expr")
            .map(|d| match named_children(d).last() {
                Some(size) => self.lower_expr(size),
                None => self.missing_expr(d, "dimension"),
            })
            .collect();
        let initializer = node
            .child_by_field_name("value")
            .map(|init| self.lower_all(&init));
        ExprKind::NewArray {
            element_type: self.field(node, "type").to_string(),
            dimensions,
            initializer,
        }
    }

    fn lower_update(&mut self, node: &Node) -> ExprKind {
        let children = all_children(node);
        let operator = children.iter().find(|c| matches!(c.kind(), "++" | "--"));
        let operand = children.iter().find(|c| c.is_named());
        match (operator, operand) {
            (Some(op), Some(operand)) => ExprKind::Unary {
                operator: self.text(op).to_string(),
                postfix: operand.start_byte() < op.start_byte(),
                operand: Box::new(self.lower_expr(operand)),
            },
            _ => ExprKind::Unsupported("update_expression".to_string()),
        }
    }

    fn lower_instanceof(&mut self, node: &Node) -> ExprKind {
        let expr = Box::new(self.expr_field(node, "left"));
        if let Some(pattern) = node.child_by_field_name("pattern") {
            let bindings: Vec<String> = find_descendants_by_kind(&pattern, "identifier")
                .iter()
                .map(|b| self.text(b).to_string())
                .collect();
            return ExprKind::InstanceOf {
                expr,
                target_type: self.text(&pattern).to_string(),
                bindings,
            };
        }
        let bindings = node
            .child_by_field_name("name")
            .map(|n| vec![self.text(&n).to_string()])
            .unwrap_or_default();
        ExprKind::InstanceOf {
            expr,
            target_type: self.field(node, "right").to_string(),
            bindings,
        }
    }

    fn lower_lambda(&mut self, node: &Node) -> ExprKind {
        let params = match node.child_by_field_name("parameters") {
            Some(p) if p.kind() == "identifier" => vec![self.text(&p).to_string()],
            Some(p) if p.kind() == "formal_parameters" => self
                .lower_parameters(&p)
                .into_iter()
                .map(|param| param.name)
                .collect(),
            Some(p) => named_children(&p)
                .iter()
                .filter(|c| c.kind() == "identifier")
                .map(|c| self.text(c).to_string())
                .collect(),
            None => Vec::new(),
        };
        let body = match node.child_by_field_name("body") {
            Some(b) if b.kind() == "block" => LambdaBody::Block(self.lower_block(&b)),
            Some(b) => LambdaBody::Expr(Box::new(self.lower_expr(&b))),
            None => LambdaBody::Expr(Box::new(self.missing_expr(node, "lambda body"))),
        };
        ExprKind::Lambda { params, body }
    }

    fn lower_method_reference(&mut self, node: &Node) -> ExprKind {
        let children = all_children(node);
        let name = children
            .last()
            .map(|n| self.text(n).to_string())
            .unwrap_or_default();
        let target = match named_children(node).first() {
            Some(t) => self.lower_expr(t),
            None => self.missing_expr(node, "method reference target"),
        };
        ExprKind::MethodReference {
            target: Box::new(target),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::features::parsing::{JavaParser, Parser};
    use crate::features::syntax_tree::{Expr, ExprKind, LambdaBody, StmtKind};

    fn expr_of(expression: &str) -> Expr {
        let source = format!("class A {{ Object m() {{ return {expression}; }} }}");
        let unit = JavaParser::new().parse(&source, "A.java").unwrap();
        let body = unit.types[0].methods[0].body.clone().unwrap();
        match body.stmts.into_iter().next().map(|s| s.kind) {
            Some(StmtKind::Return(Some(expr))) => expr,
            other => panic!("expected return, got {other:?}"),
        }
    }

    #[test]
    fn test_this_field_and_qualified_this() {
        match expr_of("this.count").kind {
            ExprKind::FieldAccess { target, field } => {
                assert!(target.is_this());
                assert_eq!(field.name, "count");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(expr_of("Outer.this").kind, ExprKind::QualifiedThis("Outer".to_string()));
        assert!(matches!(
            expr_of("Outer.super.value").kind,
            ExprKind::FieldAccess { target, .. } if target.kind == ExprKind::Super
        ));
    }

    #[test]
    fn test_invocations_and_creation() {
        match expr_of("helper(1, x)").kind {
            ExprKind::MethodInvocation(inv) => {
                assert!(inv.select.is_none());
                assert_eq!(inv.name, "helper");
                assert_eq!(inv.args.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        match expr_of("super.toString()").kind {
            ExprKind::MethodInvocation(inv) => {
                assert_eq!(inv.select.map(|s| s.kind), Some(ExprKind::Super));
            }
            other => panic!("unexpected {other:?}"),
        }
        match expr_of("outer.new Inner(1)").kind {
            ExprKind::NewClass(new) => {
                assert_eq!(new.class_name, "Inner");
                assert!(new.outer.is_some());
                assert!(!new.has_body);
            }
            other => panic!("unexpected {other:?}"),
        }
        match expr_of("new Runnable() { public void run() {} }").kind {
            ExprKind::NewClass(new) => assert!(new.has_body),
            other => panic!("unexpected {other:?}"),
        }
        match expr_of("new int[n][]").kind {
            ExprKind::NewArray { element_type, dimensions, initializer } => {
                assert_eq!(element_type, "int");
                assert_eq!(dimensions.len(), 1);
                assert!(initializer.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_operators_lambdas_and_references() {
        assert!(matches!(
            expr_of("i++").kind,
            ExprKind::Unary { postfix: true, ref operator, .. } if operator == "++"
        ));
        assert!(matches!(expr_of("-x").kind, ExprKind::Unary { postfix: false, .. }));
        assert!(matches!(
            expr_of("o instanceof String s").kind,
            ExprKind::InstanceOf { ref bindings, .. } if bindings == &vec!["s".to_string()]
        ));
        match expr_of("(a, b) -> a + b").kind {
            ExprKind::Lambda { params, body } => {
                assert_eq!(params, vec!["a", "b"]);
                assert!(matches!(body, LambdaBody::Expr(_)));
            }
            other => panic!("unexpected {other:?}"),
        }
        match expr_of("this::helper").kind {
            ExprKind::MethodReference { target, name } => {
                assert!(target.is_this());
                assert_eq!(name, "helper");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(expr_of("String.class").kind, ExprKind::ClassLiteral("String".to_string()));
    }
}
