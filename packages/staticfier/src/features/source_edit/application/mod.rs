mod apply;

pub use apply::apply_edits;
