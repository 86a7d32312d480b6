pub use crate::error::{SyntaxError, SyntaxErrorKind, TextSpan};
pub use crate::signature::{MessageKind, MessageSignature};
pub use crate::validate::{validate_icu_syntax, MAX_NESTING_DEPTH};

mod error;
mod signature;
mod validate;
mod variants;

/// Everything produced by validating one top-level message: the first
/// structural error found, if any, and the signature records accumulated for
/// the message and every sub-message examined before the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageValidation {
    pub error: Option<SyntaxError>,
    pub signatures: Vec<MessageSignature>,
}

/// Validate the ICU plural/selectordinal/select structure of a complete
/// message.
///
/// This is a structural check, not a full MessageFormat parse. It first
/// decides whether `text` is attempting ICU syntax at all; plain text comes
/// back untouched with a single plain signature record. A message that is
/// attempting ICU syntax is then checked for shape, brace balance, and the
/// variant rules of its kind, recursively through every nested sub-message.
/// The first problem found is returned with a byte span into `text`.
pub fn validate_message(text: &str) -> MessageValidation {
    let mut signatures = Vec::new();
    let error = validate_icu_syntax(text, 0, &mut signatures);
    MessageValidation { error, signatures }
}
