//! Tree-sitter Java parser

use tree_sitter::Parser as TSParser;

use crate::errors::{Result, StaticfierError};
use crate::features::parsing::ports::Parser;
use crate::features::syntax_tree::CompilationUnit;
use crate::shared::utils::first_error;

use super::lowering::Lowerer;

/// Java parser backed by tree-sitter-java
///
/// A fresh tree-sitter parser is created per call, so one `JavaParser`
/// can be shared across worker threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaParser;

impl JavaParser {
    pub fn new() -> Self {
        Self
    }

    fn ts_parser(&self) -> Result<TSParser> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| StaticfierError::Language(e.to_string()))?;
        Ok(parser)
    }
}

impl Parser for JavaParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit> {
        let mut parser = self.ts_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| StaticfierError::parse_error(file_path, "parser produced no tree"))?;

        let root = tree.root_node();
        if let Some(error) = first_error(&root) {
            let pos = error.start_position();
            let what = if error.is_missing() {
                format!("missing `{}`", error.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(StaticfierError::parse_error(
                file_path,
                format!("{} at {}:{}", what, pos.row + 1, pos.column + 1),
            ));
        }

        let unit = Lowerer::new(source).lower_program(&root, file_path);
        tracing::debug!(
            path = file_path,
            types = unit.all_types().len(),
            methods = unit.all_methods().len(),
            "lowered compilation unit"
        );
        Ok(unit)
    }
}
