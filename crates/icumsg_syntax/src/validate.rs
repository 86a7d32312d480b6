use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::signature::{MessageKind, MessageSignature};
use crate::variants::parse_variants;

/// Hard ceiling on sub-message nesting. Real messages nest two or three
/// levels deep; anything past this is malformed or hostile input, and
/// stopping here keeps the recursion bounded.
pub const MAX_NESTING_DEPTH: usize = 50;

/// Quick test for whether a message is attempting ICU plural or select
/// syntax: one of the kind keywords has to appear after the first opening
/// brace, before any second brace. Messages that fail this test are ordinary
/// text and are not validated further. Text that merely resembles ICU syntax
/// can pass this test and then fail the strict shape match, which is the
/// accepted cost of catching broken real attempts.
static ICU_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^{]*\{[^{]*\b(plural|selectordinal|select)\b").unwrap());

/// Strict shape of a complex message: everything up to and including the
/// opening brace, the variable name, the kind keyword, an optional
/// `offset:N` clause, and the variant region running to the end of the
/// text. `(?s)` lets the region span multiple lines.
static COMPLEX_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)^([^{]*\{)([a-zA-Z0-9_]+),\s*(plural|selectordinal|select),\s*(?:offset:\d+)?\s*(.*)",
    )
    .unwrap()
});

/// Validate the ICU structure of `text` at the given nesting `level`.
///
/// Returns `None` when `text` does not look like an attempt at ICU syntax,
/// or when it does and its whole structure, including every nested
/// sub-message, holds together. Otherwise returns the first problem found.
/// Problems found inside a sub-message are rebased on the way out, so the
/// returned span always indexes `text` as passed to the top-level call.
///
/// `signatures` receives one record per (sub)message examined: a plain
/// record for ordinary text, or the variable name, kind, and variant keys of
/// each complex message that validated completely. Nothing is recorded for a
/// message that fails.
///
/// Checks run in a fixed order and stop at the first failure: likeness, the
/// strict shape match, brace balance, text before and after the construct,
/// the kind keyword, then each variant in order (repeated key, key allowed
/// for the kind, recursion into the variant value), and finally the required
/// variant keys for the kind. Text before or after the construct is only an
/// error at the top level; a sub-message mixes plain text and nested
/// constructs freely.
pub fn validate_icu_syntax(
    text: &str,
    level: usize,
    signatures: &mut Vec<MessageSignature>,
) -> Option<SyntaxError> {
    let Some(like) = ICU_LIKE.find(text) else {
        signatures.push(MessageSignature::plain(level));
        return None;
    };

    if level >= MAX_NESTING_DEPTH {
        return Some(SyntaxError::new(
            SyntaxErrorKind::NestingTooDeep,
            format!("ICU message nesting deeper than {} levels", MAX_NESTING_DEPTH),
            (0, text.len()),
        ));
    }

    let Some(captures) = COMPLEX_SHAPE.captures(text) else {
        return Some(SyntaxError::new(
            SyntaxErrorKind::MalformedComplexMessage,
            "This message looks like an ICU plural, but does not follow ICU syntax.",
            (like.start(), like.end()),
        ));
    };
    let (_, [starting, variable, kind_keyword, variant_region]) = captures.extract();
    // The variant region is the final capture and runs to the end of the
    // text, so its offset falls straight out of the lengths.
    let region_offset = text.len() - variant_region.len();

    let scan = parse_variants(variant_region, region_offset);
    if scan.depth > 0 {
        return Some(SyntaxError::new(
            SyntaxErrorKind::UnbalancedOpeningBracket,
            "Invalid ICU format. Unbalanced opening bracket",
            (scan.resume, text.len()),
        ));
    }

    let ending = &text[scan.resume..];
    if starting.is_empty() {
        // Unreachable through the shape match, whose first capture always
        // ends with an opening brace. Kept so the scan logic stands alone.
        return Some(SyntaxError::new(
            SyntaxErrorKind::MissingInitialBracket,
            "Invalid ICU format. No initial opening bracket",
            (scan.resume - 1, scan.resume),
        ));
    }
    if ending.is_empty() || !ending.contains('}') {
        return Some(SyntaxError::new(
            SyntaxErrorKind::MissingFinalBracket,
            "Invalid ICU format. No final closing bracket",
            (scan.resume - 1, scan.resume),
        ));
    }
    if level == 0 {
        if !text.starts_with('{') {
            return Some(SyntaxError::new(
                SyntaxErrorKind::ExtraStartCharacters,
                format!(
                    "Invalid ICU format. Extra characters at the start of a complex message: \"{}\"",
                    starting
                ),
                (0, starting.len()),
            ));
        }
        if ending != "}" {
            return Some(SyntaxError::new(
                SyntaxErrorKind::ExtraEndCharacters,
                format!(
                    "Invalid ICU format. Extra characters at the end of a complex message: \"{}\"",
                    ending
                ),
                (scan.resume - 1, text.len() - 1),
            ));
        }
    }

    let Some(kind) = MessageKind::from_keyword(kind_keyword) else {
        // Unreachable through the shape match, which only admits the three
        // known keywords.
        return Some(SyntaxError::new(
            SyntaxErrorKind::UnknownMessageKind,
            format!(
                "Unknown ICU message type {}. Valid types are: plural, select, selectordinal",
                kind_keyword
            ),
            (0, 0),
        ));
    };

    let mut defined: HashSet<&str> = HashSet::new();
    for variant in &scan.variants {
        if defined.contains(variant.key) {
            return Some(SyntaxError::new(
                SyntaxErrorKind::RepeatedVariant,
                format!("Variant \"{}\" is defined more than once", variant.key),
                variant.key_span,
            ));
        }
        if let Some(known) = kind.known_variants() {
            if !known.contains(variant.key) {
                return Some(SyntaxError::new(
                    SyntaxErrorKind::InvalidVariantKey,
                    format!("Variant \"{}\" is not valid for {} message", variant.key, kind),
                    variant.key_span,
                ));
            }
        }
        defined.insert(variant.key);

        // Recurse into the variant value with its braces stripped. Errors
        // come back relative to the stripped slice and get rebased here.
        let inner = &variant.value[1..variant.value.len() - 1];
        if let Some(nested) = validate_icu_syntax(inner, level + 1, signatures) {
            return Some(nested.rebased(variant.value_span.0 + 1));
        }
    }

    let missing: Vec<&str> = kind
        .required_variants()
        .iter()
        .filter(|key| !defined.contains(*key))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Some(SyntaxError::new(
            SyntaxErrorKind::MissingRequiredVariants,
            format!("Required variants missing: {}", missing.join(", ")),
            (0, text.len()),
        ));
    }

    signatures.push(MessageSignature::complex(
        level,
        variable,
        kind,
        defined.into_iter().map(str::to_owned).collect(),
    ));
    None
}
