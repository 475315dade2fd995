//! Source location types
//!
//! A span carries both the byte range (used for text edits) and the
//! line/column position (used for reporting).

use serde::{Deserialize, Serialize};

/// Span in source code
///
/// Lines are 1-based, columns are 0-based byte columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(
        start_byte: usize,
        end_byte: usize,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        Self {
            start_byte,
            end_byte,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero span (0:0-0:0)
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    /// Empty span located at a byte offset (insertion point)
    pub fn point(byte: usize, line: u32, col: u32) -> Self {
        Self::new(byte, byte, line, col, line, col)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}
