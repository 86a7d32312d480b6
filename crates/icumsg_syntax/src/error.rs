use std::fmt::Formatter;

use serde::{Serialize, Serializer};

/// Half-open `(start, end)` byte range into the message text that was
/// validated. Errors found inside nested sub-messages are rebased as they
/// propagate, so the range always indexes the text given to the top-level
/// call.
pub type TextSpan = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    MalformedComplexMessage,
    UnbalancedOpeningBracket,
    MissingInitialBracket,
    MissingFinalBracket,
    ExtraStartCharacters,
    ExtraEndCharacters,
    UnknownMessageKind,
    RepeatedVariant,
    InvalidVariantKey,
    MissingRequiredVariants,
    NestingTooDeep,
}

impl SyntaxErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxErrorKind::MalformedComplexMessage => "MalformedComplexMessage",
            SyntaxErrorKind::UnbalancedOpeningBracket => "UnbalancedOpeningBracket",
            SyntaxErrorKind::MissingInitialBracket => "MissingInitialBracket",
            SyntaxErrorKind::MissingFinalBracket => "MissingFinalBracket",
            SyntaxErrorKind::ExtraStartCharacters => "ExtraStartCharacters",
            SyntaxErrorKind::ExtraEndCharacters => "ExtraEndCharacters",
            SyntaxErrorKind::UnknownMessageKind => "UnknownMessageKind",
            SyntaxErrorKind::RepeatedVariant => "RepeatedVariant",
            SyntaxErrorKind::InvalidVariantKey => "InvalidVariantKey",
            SyntaxErrorKind::MissingRequiredVariants => "MissingRequiredVariants",
            SyntaxErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }
}

impl Serialize for SyntaxErrorKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural problem found in a message. Validation stops at the first
/// problem, so at most one of these is reported per message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub description: String,
    pub span: TextSpan,
}

impl SyntaxError {
    pub(crate) fn new(
        kind: SyntaxErrorKind,
        description: impl Into<String>,
        span: TextSpan,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            span,
        }
    }

    /// Shift the span forward by `offset` bytes. Applied when an error from a
    /// nested sub-message propagates out, so that the span indexes the
    /// enclosing text instead of the slice that was recursed into.
    pub(crate) fn rebased(mut self, offset: usize) -> Self {
        self.span = (self.span.0 + offset, self.span.1 + offset);
        self
    }
}
