mod body_resolver;
mod unit_resolver;

pub use body_resolver::BodyResolver;
pub use unit_resolver::UnitNameResolver;
