use icumsg_catalog::{locale_from_file_name, MessageId, SourcePosition};
use icumsg_syntax::{SyntaxError, SyntaxErrorKind, TextSpan};
use serde::Serialize;

use crate::severity::Severity;

/// One finding for one message in a catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDiagnostic {
    pub id: MessageId,
    /// Line and column where the message value starts in its catalog file.
    pub line: u32,
    pub col: u32,
    pub severity: Severity,
    pub name: SyntaxErrorKind,
    pub description: String,
    /// Byte range of the problem within the message text itself.
    pub span: TextSpan,
}

impl MessageDiagnostic {
    pub(crate) fn from_syntax_error(
        id: MessageId,
        position: SourcePosition,
        error: SyntaxError,
    ) -> Self {
        Self {
            id,
            line: position.line,
            col: position.col,
            severity: Severity::Warning,
            name: error.kind,
            description: error.description,
            span: error.span,
        }
    }
}

/// Everything learned about one catalog file.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub file: String,
    pub locale: String,
    /// Number of messages validated.
    pub checked: usize,
    /// Number of messages whose top level is an ICU plural or select.
    pub complex: usize,
    pub diagnostics: Vec<MessageDiagnostic>,
    /// Set when the catalog itself could not be read or parsed. No messages
    /// were checked in that case.
    pub error: Option<String>,
}

impl CatalogReport {
    pub(crate) fn new(file: &str) -> Self {
        Self {
            file: file.to_owned(),
            locale: locale_from_file_name(file).to_owned(),
            checked: 0,
            complex: 0,
            diagnostics: Vec::new(),
            error: None,
        }
    }

    pub(crate) fn failed(file: &str, error: impl ToString) -> Self {
        let mut report = Self::new(file);
        report.error = Some(error.to_string());
        report
    }

    /// True when this catalog should fail a lint run, either from findings
    /// in its messages or from failing to be read at all.
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty() || self.error.is_some()
    }
}
