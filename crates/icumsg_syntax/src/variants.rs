use memchr::memchr2_iter;

use crate::error::TextSpan;

/// One `key {value}` branch found in the variant region of a complex
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Variant<'a> {
    pub key: &'a str,
    pub key_span: TextSpan,
    /// The branch value including its surrounding braces.
    pub value: &'a str,
    pub value_span: TextSpan,
}

/// Result of scanning a variant region.
pub(crate) struct VariantScan<'a> {
    pub variants: Vec<Variant<'a>>,
    /// Brace depth left open when the scan ended. Non-zero means an opening
    /// brace was never closed.
    pub depth: usize,
    /// Byte offset where the enclosing message resumes: just past the last
    /// completed variant, or at the stray closing brace that ended the scan.
    pub resume: usize,
}

/// Scan `text`, the variant region of a complex message, for `key {value}`
/// pairs by tracking brace depth. Braces inside a value nest freely and do
/// not terminate it. A closing brace at depth zero belongs to the enclosing
/// message and stops the scan.
///
/// `offset` is the region's byte position within the enclosing message and
/// is pre-applied to every span and to `resume`.
pub(crate) fn parse_variants(text: &str, offset: usize) -> VariantScan<'_> {
    let mut variants = Vec::new();
    let mut depth = 0usize;
    // Start of the text not yet attributed to a variant: the region start,
    // or the byte just past the previous variant's closing brace.
    let mut tail_start = 0usize;
    let mut value_start = 0usize;
    let mut key = "";
    let mut key_span = (offset, offset);

    for index in memchr2_iter(b'{', b'}', text.as_bytes()) {
        if text.as_bytes()[index] == b'{' {
            if depth == 0 {
                let chunk = &text[tail_start..index];
                key = chunk.trim();
                let key_start = offset + tail_start + chunk.find(key).unwrap_or(0);
                key_span = (key_start, key_start + key.len());
                value_start = index;
            }
            depth += 1;
        } else {
            if depth == 0 {
                return VariantScan {
                    variants,
                    depth,
                    resume: offset + index,
                };
            }
            depth -= 1;
            if depth == 0 {
                variants.push(Variant {
                    key,
                    key_span,
                    value: &text[value_start..=index],
                    value_span: (offset + value_start, offset + index + 1),
                });
                tail_start = index + 1;
            }
        }
    }

    VariantScan {
        variants,
        depth,
        resume: offset + tail_start,
    }
}
