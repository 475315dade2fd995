use crate::errors::Result;
use crate::features::syntax_tree::CompilationUnit;
use crate::features::type_resolution::domain::ResolvedUnit;

pub trait UnitResolver: Send + Sync {
    fn resolve(&self, unit: &CompilationUnit) -> Result<ResolvedUnit>;
}
