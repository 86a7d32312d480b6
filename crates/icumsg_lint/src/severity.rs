use std::fmt::Formatter;

use serde::{Serialize, Serializer};

/// How severe a finding is. ICU syntax findings are warnings: the likeness
/// test can fire on text that merely resembles ICU syntax, so a finding asks
/// for review rather than proving the message broken. A catalog that cannot
/// be read or parsed at all is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
