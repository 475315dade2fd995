//! Whole-unit resolver

use crate::errors::Result;
use crate::features::syntax_tree::CompilationUnit;
use crate::features::type_resolution::domain::{ResolvedUnit, SymbolTable};
use crate::features::type_resolution::ports::UnitResolver;

use super::body_resolver::BodyResolver;

/// Resolves every method of a unit against the unit's own declarations
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitNameResolver;

impl UnitNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl UnitResolver for UnitNameResolver {
    fn resolve(&self, unit: &CompilationUnit) -> Result<ResolvedUnit> {
        let symbols = SymbolTable::build(unit);
        let resolved = unit.map_methods(&mut |method| {
            BodyResolver::new(&symbols, method.declaring_type.id).resolve_method(method)
        });
        tracing::debug!(
            path = %unit.path,
            types = symbols.types().count(),
            "resolved compilation unit"
        );
        Ok(ResolvedUnit {
            unit: resolved,
            symbols,
        })
    }
}
