//! Compilation unit, type and member declarations

use tree_sitter::Node;

use crate::features::syntax_tree::{
    CompilationUnit, FieldDecl, ImportDecl, MethodDeclaration, Parameter, TypeDecl, TypeKind,
    TypeRef,
};
use crate::shared::utils::{
    all_children, children_by_field, find_child_by_kind, named_children, SpanExt,
};

use super::Lowerer;

pub(super) fn is_type_declaration(kind: &str) -> bool {
    matches!(
        kind,
        "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration"
    )
}

impl<'s> Lowerer<'s> {
    pub fn lower_program(&mut self, root: &Node, path: &str) -> CompilationUnit {
        let mut package = None;
        let mut imports = Vec::new();
        let mut types = Vec::new();

        for child in named_children(root) {
            match child.kind() {
                "package_declaration" => {
                    package = named_children(&child)
                        .into_iter()
                        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
                        .map(|c| self.text(&c).to_string());
                }
                "import_declaration" => imports.push(self.lower_import(&child)),
                kind if is_type_declaration(kind) => types.push(self.lower_type(&child)),
                _ => {}
            }
        }

        CompilationUnit {
            path: path.to_string(),
            package,
            imports,
            types,
            span: root.to_span(),
        }
    }

    fn lower_import(&self, node: &Node) -> ImportDecl {
        let children = all_children(node);
        let path = children
            .iter()
            .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
            .map(|c| self.text(c).to_string())
            .unwrap_or_default();
        ImportDecl {
            path,
            is_static: children.iter().any(|c| c.kind() == "static"),
            is_wildcard: children.iter().any(|c| c.kind() == "asterisk"),
            span: node.to_span(),
        }
    }

    fn lower_type(&mut self, node: &Node) -> TypeDecl {
        let id = self.ids.next_type();
        let kind = match node.kind() {
            "interface_declaration" => TypeKind::Interface,
            "enum_declaration" => TypeKind::Enum,
            "record_declaration" => TypeKind::Record,
            "annotation_type_declaration" => TypeKind::Annotation,
            _ => TypeKind::Class,
        };
        let modifiers = self.lower_modifiers(node);
        let type_parameters = node
            .child_by_field_name("type_parameters")
            .map(|tp| self.type_parameter_names(&tp))
            .unwrap_or_default();

        let mut extends = Vec::new();
        if let Some(superclass) = node.child_by_field_name("superclass") {
            extends.extend(named_children(&superclass).iter().map(|c| self.text(c).to_string()));
        }
        if let Some(ext) = find_child_by_kind(node, "extends_interfaces") {
            extends.extend(self.type_list(&ext));
        }
        let implements = node
            .child_by_field_name("interfaces")
            .map(|i| self.type_list(&i))
            .unwrap_or_default();

        let record_components = match (kind, node.child_by_field_name("parameters")) {
            (TypeKind::Record, Some(params)) => named_children(&params)
                .iter()
                .map(|p| self.parameter_name(p))
                .filter(|n| !n.is_empty())
                .collect(),
            _ => Vec::new(),
        };

        let mut decl = TypeDecl {
            id,
            kind,
            name: self.field(node, "name").to_string(),
            modifiers,
            type_parameters,
            extends,
            implements,
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
            enum_constants: Vec::new(),
            record_components,
            span: node.to_span(),
        };
        if let Some(body) = node.child_by_field_name("body") {
            self.lower_type_body(&body, &mut decl);
        }
        decl
    }

    fn lower_type_body(&mut self, body: &Node, decl: &mut TypeDecl) {
        for member in named_children(body) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    let field = self.lower_field(&member);
                    decl.fields.push(field);
                }
                "method_declaration" => {
                    let owner = decl.type_ref();
                    let method = self.lower_method(&member, owner);
                    decl.methods.push(method);
                }
                "enum_constant" => {
                    decl.enum_constants.push(self.field(&member, "name").to_string());
                }
                "enum_body_declarations" => self.lower_type_body(&member, decl),
                kind if is_type_declaration(kind) => {
                    let nested = self.lower_type(&member);
                    decl.nested.push(nested);
                }
                // constructors, initializers and annotation elements are not candidates
                _ => {}
            }
        }
    }

    fn lower_field(&mut self, node: &Node) -> FieldDecl {
        let modifiers = self.lower_modifiers(node);
        let names = children_by_field(node, "declarator")
            .iter()
            .map(|d| self.field(d, "name").to_string())
            .collect();
        FieldDecl {
            names,
            field_type: self.field(node, "type").to_string(),
            modifiers,
            span: node.to_span(),
        }
    }

    fn lower_method(&mut self, node: &Node, declaring_type: TypeRef) -> MethodDeclaration {
        let id = self.ids.next_node();
        let modifiers = self.lower_modifiers(node);
        let type_parameters = node
            .child_by_field_name("type_parameters")
            .map(|tp| self.type_parameter_names(&tp))
            .unwrap_or_default();
        let parameters = node
            .child_by_field_name("parameters")
            .map(|p| self.lower_parameters(&p))
            .unwrap_or_default();
        let body = node.child_by_field_name("body").map(|b| self.lower_block(&b));

        MethodDeclaration {
            id,
            name: self.field(node, "name").to_string(),
            modifiers,
            type_parameters,
            return_type: self.field(node, "type").to_string(),
            parameters,
            body,
            declaring_type,
            method_ref: None,
            span: node.to_span(),
        }
    }

    pub(super) fn lower_parameters(&self, params: &Node) -> Vec<Parameter> {
        named_children(params)
            .iter()
            .filter_map(|p| match p.kind() {
                "formal_parameter" => Some(Parameter {
                    name: self.field(p, "name").to_string(),
                    param_type: self.field(p, "type").to_string(),
                    varargs: false,
                    span: p.to_span(),
                }),
                "spread_parameter" => Some(Parameter {
                    name: self.parameter_name(p),
                    param_type: named_children(p)
                        .iter()
                        .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))
                        .map(|c| format!("{}...", self.text(c)))
                        .unwrap_or_default(),
                    varargs: true,
                    span: p.to_span(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Declared name of a formal or spread parameter
    fn parameter_name(&self, param: &Node) -> String {
        if let Some(name) = param.child_by_field_name("name") {
            return self.text(&name).to_string();
        }
        find_child_by_kind(param, "variable_declarator")
            .map(|d| self.field(&d, "name").to_string())
            .unwrap_or_default()
    }

    fn type_parameter_names(&self, node: &Node) -> Vec<String> {
        named_children(node)
            .iter()
            .filter(|c| c.kind() == "type_parameter")
            .filter_map(|tp| {
                named_children(tp)
                    .into_iter()
                    .find(|c| matches!(c.kind(), "type_identifier" | "identifier"))
                    .map(|c| self.text(&c).to_string())
            })
            .collect()
    }

    /// Types of `implements A, B` / `extends A, B`
    fn type_list(&self, node: &Node) -> Vec<String> {
        let mut types = Vec::new();
        for child in named_children(node) {
            if child.kind() == "type_list" {
                types.extend(named_children(&child).iter().map(|t| self.text(t).to_string()));
            } else {
                types.push(self.text(&child).to_string());
            }
        }
        types
    }
}
