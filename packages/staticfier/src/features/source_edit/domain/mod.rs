mod text_edit;

pub use text_edit::TextEdit;
