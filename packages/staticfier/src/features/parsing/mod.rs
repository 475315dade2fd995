//! Parsing Feature
//!
//! Turns Java source text into the syntax tree of `syntax_tree`.
//!
//! ## Structure
//! - `ports/` - Parser trait
//! - `application/` - ParseFileUseCase
//! - `infrastructure/` - JavaParser (tree-sitter) and lowering

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::{parse_java, ParseFileUseCase};
pub use infrastructure::JavaParser;
pub use ports::Parser;
