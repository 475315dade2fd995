//! Parser port (interface)
//!
//! Defines the contract for parsing source code.

use crate::errors::Result;
use crate::features::syntax_tree::CompilationUnit;

/// Parser trait - abstraction over parsing implementation
pub trait Parser: Send + Sync {
    /// Parse source code into a compilation unit
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit>;
}
