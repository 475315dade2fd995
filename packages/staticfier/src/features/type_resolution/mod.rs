//! Type Resolution Feature
//!
//! Single-unit name resolution: attaches owners and static flags to every
//! name, field access and invocation of every method body.
//!
//! ## Structure
//! - `domain/` - symbols of the unit and the SymbolTable over them
//! - `ports/` - UnitResolver trait
//! - `infrastructure/` - BodyResolver, UnitNameResolver
//! - `application/` - ResolveTypesUseCase

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{resolve_unit, ResolveTypesUseCase};
pub use domain::{FieldSymbol, Lookup, MethodSymbol, ResolvedUnit, SymbolTable, TypeSymbol};
pub use infrastructure::{BodyResolver, UnitNameResolver};
pub use ports::UnitResolver;
