mod rewrite_diff;

pub use rewrite_diff::edits_for_rewrite;
