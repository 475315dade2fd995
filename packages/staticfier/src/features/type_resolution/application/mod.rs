mod resolve_types;

pub use resolve_types::{resolve_unit, ResolveTypesUseCase};
