use std::borrow::Cow;

use memchr::memchr3;

use crate::entry::{message_id, CatalogEntry, SourcePosition};
use crate::error::CatalogError;
use crate::unescape::unescape_catalog_str;

/// Parse the given `text` as a single, flat JSON object of message ids to
/// message values.
///
/// This is deliberately not a general JSON parser. Catalogs only ever hold
/// one flat object of string values, and this parser tracks the line and
/// column of every value as it goes, which is the primary reason for this
/// implementation over existing libraries like serde that only track that
/// state internally.
///
/// A few conventions of hand-maintained catalogs are tolerated: a trailing
/// comma after the last entry, and content after the closing brace of the
/// object. Strings may not contain raw newlines. Entries are returned in the
/// order they appear, including repeated ids.
pub fn parse_catalog(text: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    CatalogParser::new(text).parse()
}

struct CatalogParser<'a> {
    text: &'a str,
    position: usize,
    line: u32,
    last_line_start: usize,
}

impl<'a> CatalogParser<'a> {
    fn new(text: &'a str) -> CatalogParser<'a> {
        Self {
            text,
            position: 0,
            line: 1,
            last_line_start: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    /// 1-based byte column of the current position.
    fn column(&self) -> u32 {
        (self.position - self.last_line_start) as u32 + 1
    }

    fn expected(&self, expected: char) -> CatalogError {
        CatalogError::Expected {
            expected,
            line: self.line,
            col: self.column(),
        }
    }

    fn expect(&mut self, expected: u8) -> Result<(), CatalogError> {
        if self.peek() == Some(expected) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.expected(expected as char))
        }
    }

    /// Skip whitespace between tokens. Strings reject raw newlines, so this
    /// is the only place lines are counted.
    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        let mut position = self.position;
        while position < bytes.len() {
            match bytes[position] {
                b' ' | b'\t' | b'\r' => position += 1,
                b'\n' => {
                    position += 1;
                    self.line += 1;
                    self.last_line_start = position;
                }
                _ => break,
            }
        }
        self.position = position;
    }

    /// Parse a quoted string starting at the current position. Returns the
    /// raw contents with escapes unresolved, and whether any escape was seen
    /// so unescaping can be skipped entirely for the common case.
    fn parse_string(&mut self) -> Result<(&'a str, bool), CatalogError> {
        let start_line = self.line;
        let start_col = self.column();
        self.expect(b'"')?;
        let text = self.text;
        let content_start = self.position;
        let mut has_escapes = false;
        loop {
            let Some(found) = memchr3(b'"', b'\\', b'\n', &text.as_bytes()[self.position..])
            else {
                return Err(CatalogError::UnterminatedString {
                    line: start_line,
                    col: start_col,
                });
            };
            let at = self.position + found;
            match text.as_bytes()[at] {
                b'"' => {
                    self.position = at + 1;
                    return Ok((&text[content_start..at], has_escapes));
                }
                b'\\' => {
                    // An escaped raw newline would silently break the line
                    // accounting, so reject it like an unescaped one.
                    if text.as_bytes().get(at + 1) == Some(&b'\n') {
                        return Err(CatalogError::NewlineInString {
                            line: self.line,
                            col: (at + 1 - self.last_line_start) as u32 + 1,
                        });
                    }
                    has_escapes = true;
                    // Skip the introducer and the byte it escapes so `\"`
                    // does not terminate the string.
                    self.position = at + 2;
                    if self.position > text.len() {
                        return Err(CatalogError::UnterminatedString {
                            line: start_line,
                            col: start_col,
                        });
                    }
                }
                _ => {
                    return Err(CatalogError::NewlineInString {
                        line: self.line,
                        col: (at - self.last_line_start) as u32 + 1,
                    });
                }
            }
        }
    }

    fn unescape(
        &self,
        raw: &'a str,
        position: SourcePosition,
    ) -> Result<Cow<'a, str>, CatalogError> {
        unescape_catalog_str(raw).map_err(|_| CatalogError::InvalidEscape {
            line: position.line,
            col: position.col,
        })
    }

    fn parse(mut self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let mut entries = Vec::new();
        self.skip_whitespace();
        self.expect(b'{')?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'}') => break,
                Some(b'"') => {}
                Some(_) => return Err(self.expected('"')),
                None => return Err(CatalogError::UnexpectedEnd),
            }

            let key_position = SourcePosition {
                line: self.line,
                col: self.column() + 1,
            };
            let (raw_key, key_has_escapes) = self.parse_string()?;
            let key = if key_has_escapes {
                self.unescape(raw_key, key_position)?
            } else {
                Cow::Borrowed(raw_key)
            };

            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.expected('"'));
            }
            // Position of the first byte of the value's content, just past
            // the opening quote.
            let position = SourcePosition {
                line: self.line,
                col: self.column() + 1,
            };
            let (raw_value, value_has_escapes) = self.parse_string()?;
            let text = if value_has_escapes {
                self.unescape(raw_value, position)?.into_owned()
            } else {
                raw_value.to_owned()
            };
            entries.push(CatalogEntry {
                id: message_id(&key),
                text,
                position,
            });

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.position += 1,
                Some(b'}') => break,
                Some(_) => return Err(self.expected(',')),
                None => return Err(CatalogError::UnexpectedEnd),
            }
        }
        // Anything after the closing brace is ignored.
        Ok(entries)
    }
}
