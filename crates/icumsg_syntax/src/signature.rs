use std::collections::HashSet;
use std::fmt::Formatter;

use lazy_static::lazy_static;

lazy_static! {
    /// Variant keys that CLDR defines for cardinal and ordinal plural rules,
    /// plus the explicit-value forms the validator accepts. Real locales only
    /// use a subset, but a translation in any locale may name any of these.
    static ref PLURAL_VARIANT_KEYS: HashSet<&'static str> =
        HashSet::from(["=0", "=1", "zero", "one", "two", "few", "many", "other"]);
}

/// The kind of a complex ICU message, as named by the keyword in its second
/// argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Plural,
    SelectOrdinal,
    Select,
}

impl MessageKind {
    pub fn from_keyword(keyword: &str) -> Option<MessageKind> {
        match keyword {
            "plural" => Some(MessageKind::Plural),
            "selectordinal" => Some(MessageKind::SelectOrdinal),
            "select" => Some(MessageKind::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Plural => "plural",
            MessageKind::SelectOrdinal => "selectordinal",
            MessageKind::Select => "select",
        }
    }

    /// The set of variant keys allowed for this kind, or `None` when any key
    /// is allowed. `select` messages match arbitrary string values, so their
    /// keys are unrestricted.
    pub fn known_variants(&self) -> Option<&'static HashSet<&'static str>> {
        match self {
            MessageKind::Plural | MessageKind::SelectOrdinal => Some(&PLURAL_VARIANT_KEYS),
            MessageKind::Select => None,
        }
    }

    /// Variant keys that every message of this kind must define. Kept in a
    /// fixed order so a "missing variants" report always lists them the same
    /// way.
    pub fn required_variants(&self) -> &'static [&'static str] {
        match self {
            MessageKind::Plural => &["=1", "other"],
            MessageKind::SelectOrdinal => &["one", "other"],
            MessageKind::Select => &["other"],
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record of one (sub)message the validator examined. Plain text yields a
/// record with no variable, kind, or variants. A complex message yields its
/// variable name, kind, and the set of variant keys it defines. Records for
/// sub-messages appear before the record of the message containing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSignature {
    /// Nesting depth this (sub)message was found at. The top level is 0.
    pub level: usize,
    pub variable: Option<String>,
    pub kind: Option<MessageKind>,
    pub variants: Option<HashSet<String>>,
}

impl MessageSignature {
    pub(crate) fn plain(level: usize) -> Self {
        Self {
            level,
            variable: None,
            kind: None,
            variants: None,
        }
    }

    pub(crate) fn complex(
        level: usize,
        variable: &str,
        kind: MessageKind,
        variants: HashSet<String>,
    ) -> Self {
        Self {
            level,
            variable: Some(variable.to_owned()),
            kind: Some(kind),
            variants: Some(variants),
        }
    }

    /// True when this record describes an actual ICU construct rather than a
    /// plain text (sub)message.
    pub fn is_complex(&self) -> bool {
        self.kind.is_some()
    }
}
