//! Type resolution domain models

mod naming;
mod symbol_table;
mod symbols;

pub use naming::{is_constant_name, is_upper_camel, simple_type_name, type_tokens};
pub use symbol_table::{Lookup, SymbolTable};
pub use symbols::{FieldSymbol, MethodSymbol, ResolvedUnit, TypeSymbol};
