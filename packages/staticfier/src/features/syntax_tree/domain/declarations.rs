//! Compilation unit and member declarations

use serde::{Deserialize, Serialize};

use crate::shared::models::{NodeId, Span, TypeId};

use super::modifiers::{ModifierKind, ModifierList};
use super::references::MethodRef;
use super::statements::Block;

/// One parsed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub path: String,
    pub package: Option<String>,
    pub imports: Vec<ImportDecl>,
    pub types: Vec<TypeDecl>,
    pub span: Span,
}

impl CompilationUnit {
    /// All type declarations, nested ones included (pre-order)
    pub fn all_types(&self) -> Vec<&TypeDecl> {
        let mut result = Vec::new();
        let mut stack: Vec<&TypeDecl> = self.types.iter().rev().collect();
        while let Some(ty) = stack.pop() {
            result.push(ty);
            stack.extend(ty.nested.iter().rev());
        }
        result
    }

    /// All method declarations of all types
    pub fn all_methods(&self) -> Vec<&MethodDeclaration> {
        self.all_types()
            .into_iter()
            .flat_map(|ty| ty.methods.iter())
            .collect()
    }

    /// New unit with every method passed through `f`
    pub fn map_methods<F>(&self, f: &mut F) -> CompilationUnit
    where
        F: FnMut(&MethodDeclaration) -> MethodDeclaration,
    {
        CompilationUnit {
            path: self.path.clone(),
            package: self.package.clone(),
            imports: self.imports.clone(),
            types: self.types.iter().map(|ty| ty.map_methods(f)).collect(),
            span: self.span,
        }
    }

    /// New unit with the method `id` replaced; siblings and positions are kept
    pub fn replace_method(&self, id: NodeId, replacement: &MethodDeclaration) -> CompilationUnit {
        self.map_methods(&mut |m| {
            if m.id == id {
                replacement.clone()
            } else {
                m.clone()
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Dotted path without `.*`
    pub path: String,
    pub is_static: bool,
    pub is_wildcard: bool,
    pub span: Span,
}

impl ImportDecl {
    /// Last path segment (`List` for `java.util.List`)
    pub fn simple_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// Class, interface, enum, record or annotation type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub id: TypeId,
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: ModifierList,
    pub type_parameters: Vec<String>,
    /// Superclass (classes) or super-interfaces (interfaces), type text
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDeclaration>,
    pub nested: Vec<TypeDecl>,
    pub enum_constants: Vec<String>,
    pub record_components: Vec<String>,
    pub span: Span,
}

impl TypeDecl {
    pub fn type_ref(&self) -> TypeRef {
        TypeRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    fn map_methods<F>(&self, f: &mut F) -> TypeDecl
    where
        F: FnMut(&MethodDeclaration) -> MethodDeclaration,
    {
        TypeDecl {
            methods: self.methods.iter().map(|m| f(m)).collect(),
            nested: self.nested.iter().map(|ty| ty.map_methods(f)).collect(),
            ..self.clone()
        }
    }
}

/// Field declaration (`int a, b = 2;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub names: Vec<String>,
    pub field_type: String,
    pub modifiers: ModifierList,
    pub span: Span,
}

/// Declaring-type identity plus the simple name used for qualification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: TypeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: String,
    pub varargs: bool,
    pub span: Span,
}

/// Method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub id: NodeId,
    pub name: String,
    pub modifiers: ModifierList,
    pub type_parameters: Vec<String>,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    /// `None` for abstract and native methods
    pub body: Option<Block>,
    pub declaring_type: TypeRef,
    /// Resolved self-identity, filled in by the resolver
    pub method_ref: Option<MethodRef>,
    pub span: Span,
}

impl MethodDeclaration {
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        self.modifiers.has(kind)
    }

    pub fn is_private(&self) -> bool {
        self.has_modifier(ModifierKind::Private)
    }

    pub fn is_static(&self) -> bool {
        self.has_modifier(ModifierKind::Static)
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_varargs(&self) -> bool {
        self.parameters.last().map(|p| p.varargs).unwrap_or(false)
    }

    /// `Type.method` for messages
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.declaring_type.name, self.name)
    }
}
