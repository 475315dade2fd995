//! Parse file use case

use crate::errors::Result;
use crate::features::parsing::infrastructure::JavaParser;
use crate::features::parsing::ports::Parser;
use crate::features::syntax_tree::CompilationUnit;

/// Parse file use case
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Execute the parse operation
    pub fn execute(&self, source: &str, file_path: &str) -> Result<CompilationUnit> {
        self.parser.parse(source, file_path)
    }
}

/// Parse one Java file with the default parser
pub fn parse_java(source: &str, file_path: &str) -> Result<CompilationUnit> {
    ParseFileUseCase::new(JavaParser::new()).execute(source, file_path)
}
