use std::borrow::Cow;

use unescape_zero_copy::Error;

/// Resolve JSON escape sequences in a raw string slice taken from a catalog.
/// Borrows the input untouched when it turns out to contain no escapes.
pub(crate) fn unescape_catalog_str(raw: &str) -> Result<Cow<'_, str>, Error> {
    unescape_zero_copy::unescape(json_escape_sequence, raw)
}

/// Decode a single JSON escape sequence, given the text just past a `\`.
/// Returns the decoded character and the remaining text. Section 9 of
/// https://ecma-international.org/wp-content/uploads/ECMA-404.pdf defines
/// the valid sequences; unknown single-character escapes pass through as the
/// character itself, which covers `\"`, `\\`, and `\/` in one arm.
fn json_escape_sequence(s: &str) -> Result<(char, &str), Error> {
    let mut chars = s.chars();
    let next = chars.next().ok_or(Error::IncompleteSequence)?;
    match next {
        'b' => Ok(('\x08', chars.as_str())),
        'f' => Ok(('\x0C', chars.as_str())),
        'n' => Ok(('\n', chars.as_str())),
        'r' => Ok(('\r', chars.as_str())),
        't' => Ok(('\t', chars.as_str())),
        'u' => unicode_escape_sequence(s),
        ch => Ok((ch, chars.as_str())),
    }
}

fn unicode_escape_sequence(s: &str) -> Result<(char, &str), Error> {
    let first = hex_code_unit(s, 1)?;
    // The low half of the BMP surrogate range cannot stand on its own; it
    // only ever appears as the second unit of a pair.
    if (0xDC00..=0xDFFF).contains(&first) {
        return Err(Error::InvalidUnicode(first));
    }
    if !(0xD800..=0xDBFF).contains(&first) {
        let ch = char::from_u32(first).ok_or(Error::InvalidUnicode(first))?;
        return Ok((ch, &s[5..]));
    }
    // A high surrogate means this must be a pair, `\uXXXX\uXXXX`, with the
    // low unit following immediately.
    if !s[5..].starts_with("\\u") {
        return Err(Error::InvalidUnicode(first));
    }
    let second = hex_code_unit(s, 7)?;
    if !(0xDC00..=0xDFFF).contains(&second) {
        return Err(Error::InvalidUnicode(second));
    }
    let combined = (((first - 0xD800) << 10) | (second - 0xDC00)) + 0x1_0000;
    let ch = char::from_u32(combined).ok_or(Error::InvalidUnicode(combined))?;
    Ok((ch, &s[11..]))
}

fn hex_code_unit(s: &str, start: usize) -> Result<u32, Error> {
    let digits = s.get(start..start + 4).ok_or(Error::IncompleteSequence)?;
    // from_str_radix tolerates a leading sign, which JSON does not.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::IncompleteSequence);
    }
    Ok(u32::from_str_radix(digits, 16)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_escapes() {
        assert_eq!(unescape_catalog_str(r"a\nb\tc\\d").unwrap(), "a\nb\tc\\d");
        assert_eq!(unescape_catalog_str(r#"quote \" slash \/"#).unwrap(), "quote \" slash /");
    }

    #[test]
    fn borrows_when_nothing_is_escaped() {
        let result = unescape_catalog_str("plain text").unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn bmp_unicode_escape() {
        assert_eq!(unescape_catalog_str(r"caf\u00e9").unwrap(), "café");
    }

    #[test]
    fn surrogate_pair_combines() {
        assert_eq!(unescape_catalog_str(r"speaker \uD83D\uDD08").unwrap(), "speaker 🔈");
    }

    #[test]
    fn lone_low_surrogate_is_rejected() {
        assert!(unescape_catalog_str(r"\uDD08").is_err());
    }

    #[test]
    fn high_surrogate_without_a_pair_is_rejected() {
        assert!(unescape_catalog_str(r"\uD83D oops").is_err());
    }

    #[test]
    fn truncated_unicode_escape_is_rejected() {
        assert!(unescape_catalog_str(r"\u00").is_err());
    }

    #[test]
    fn sign_prefixed_unicode_escape_is_rejected() {
        assert!(unescape_catalog_str(r"\u+0FF").is_err());
        assert!(unescape_catalog_str(r"\u-123").is_err());
    }
}
