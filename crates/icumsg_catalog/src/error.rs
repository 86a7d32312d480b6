use thiserror::Error;

/// Ways reading a catalog file's JSON can fail. Parsing stops at the first
/// failure, so a catalog that fails to parse yields no entries at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Expected '{expected}' at line {line}, column {col}")]
    Expected { expected: char, line: u32, col: u32 },
    #[error("Unterminated string starting at line {line}, column {col}")]
    UnterminatedString { line: u32, col: u32 },
    #[error("Strings may not contain raw newlines (line {line}, column {col})")]
    NewlineInString { line: u32, col: u32 },
    #[error("Invalid escape sequence in the string at line {line}, column {col}")]
    InvalidEscape { line: u32, col: u32 },
    #[error("Catalog ended before the object was closed")]
    UnexpectedEnd,
}
