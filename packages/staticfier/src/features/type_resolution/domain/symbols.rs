//! Symbols of one compilation unit

use crate::features::syntax_tree::{CompilationUnit, TypeKind};
use crate::shared::models::{MethodId, NodeId, TypeId};

use super::symbol_table::SymbolTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSymbol {
    pub name: String,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    pub id: MethodId,
    /// Declaration node in the unit
    pub node: NodeId,
    pub name: String,
    pub arity: usize,
    pub varargs: bool,
    pub is_static: bool,
}

impl MethodSymbol {
    /// Whether a call with `args` arguments can select this method
    pub fn accepts_arity(&self, args: usize) -> bool {
        if self.varargs {
            args + 1 >= self.arity
        } else {
            args == self.arity
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    pub id: TypeId,
    pub name: String,
    pub kind: TypeKind,
    /// Lexically enclosing type
    pub outer: Option<TypeId>,
    /// Nested class that holds a reference to an enclosing instance
    pub is_inner: bool,
    pub type_parameters: Vec<String>,
    /// Direct supertypes declared in the unit
    pub supertypes: Vec<TypeId>,
    /// Some direct supertype lives outside the unit (implicit `Object` excluded)
    pub has_external_supertype: bool,
    pub fields: Vec<FieldSymbol>,
    pub methods: Vec<MethodSymbol>,
    pub nested: Vec<TypeId>,
}

impl TypeSymbol {
    pub fn field(&self, name: &str) -> Option<&FieldSymbol> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodSymbol> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }
}

/// A compilation unit with every reference resolved, plus its symbols
#[derive(Debug, Clone)]
pub struct ResolvedUnit {
    pub unit: CompilationUnit,
    pub symbols: SymbolTable,
}
