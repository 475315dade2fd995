//! Parsing infrastructure
//!
//! This is where the tree-sitter dependency lives.

mod java_parser;
mod lowering;

pub use java_parser::JavaParser;
pub use lowering::Lowerer;
