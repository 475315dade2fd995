use crate::errors::Result;
use crate::features::syntax_tree::CompilationUnit;
use crate::features::type_resolution::domain::ResolvedUnit;
use crate::features::type_resolution::infrastructure::UnitNameResolver;
use crate::features::type_resolution::ports::UnitResolver;

pub struct ResolveTypesUseCase<R: UnitResolver> {
    resolver: R,
}

impl<R: UnitResolver> ResolveTypesUseCase<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, unit: &CompilationUnit) -> Result<ResolvedUnit> {
        self.resolver.resolve(unit)
    }
}

/// Resolve one unit with the default resolver
pub fn resolve_unit(unit: &CompilationUnit) -> Result<ResolvedUnit> {
    ResolveTypesUseCase::new(UnitNameResolver::new()).execute(unit)
}
