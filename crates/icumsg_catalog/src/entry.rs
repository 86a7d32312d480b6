//! Types for the messages read out of a translation catalog: interned ids,
//! source positions, and the entries themselves.
use serde::Serialize;
use ustr::{ustr, Ustr};

/// A symbol representing a message id. The same ids repeat across every
/// locale's catalog, so they are interned once and copied freely afterwards.
pub type MessageId = Ustr;

/// Intern the given value as a [`MessageId`]. This is thread-safe, but will
/// lock any reads from the store that are happening concurrently.
pub fn message_id(value: &str) -> MessageId {
    ustr(value)
}

/// Line and column where a message value starts in its catalog file, used
/// for presenting diagnostics at an accurate location. Both are 1-based, and
/// `col` counts bytes from the start of the line, not characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    pub line: u32,
    pub col: u32,
}

/// One message read out of a catalog, with JSON escapes already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub id: MessageId,
    pub text: String,
    /// Position of the first byte of the message value's content.
    pub position: SourcePosition,
}
