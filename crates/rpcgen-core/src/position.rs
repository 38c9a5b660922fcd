//! Source positions for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in an interface source file.
///
/// Lines and columns are 1-based. Displayed as `file:line:column`, the
/// same shape compilers and editors recognize for jump-to-location.
///
/// # Examples
///
/// ```
/// use rpcgen_core::SourcePosition;
///
/// let pos = SourcePosition::new("arith.go", 3, 2);
/// assert_eq!(pos.to_string(), "arith.go:3:2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// File name as given on the command line
    pub file: String,
    /// 1-based line number
    pub line: u32,
    /// 1-based column number (in characters)
    pub column: u32,
}

impl SourcePosition {
    /// Creates a new source position.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
