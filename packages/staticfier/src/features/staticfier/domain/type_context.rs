use crate::features::syntax_tree::TypeRef;

/// Enclosing-type information for one method, passed explicitly through
/// the analysis and the rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeContext {
    pub declaring_type: TypeRef,
    /// Type parameters of the declaring type (and of enclosing types, for
    /// inner classes) that a static method could no longer see
    pub type_parameters: Vec<String>,
}

impl TypeContext {
    pub fn new(declaring_type: TypeRef) -> Self {
        Self {
            declaring_type,
            type_parameters: Vec::new(),
        }
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<String>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    /// Simple name used to qualify self-references
    pub fn type_name(&self) -> &str {
        &self.declaring_type.name
    }
}
