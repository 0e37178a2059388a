//! Deck line reader and fixed-column field extraction

use crate::error::Result;
use encoding_rs::Encoding;
use std::io::BufRead;

/// One physical deck line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number
    pub number: usize,
    /// Line text without its terminator
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Integer in columns `[start, start + len)`
    pub fn int(&self, start: usize, len: usize) -> i64 {
        field_int(&self.text, start, len)
    }

    /// Double in columns `[start, start + len)`
    pub fn double(&self, start: usize, len: usize) -> f64 {
        field_double(&self.text, start, len)
    }

    /// Trimmed text in columns `[start, start + len)`
    pub fn str(&self, start: usize, len: usize) -> &str {
        columns(&self.text, start, len).trim()
    }

    /// Whether columns `[start, start + len)` hold only whitespace
    pub fn is_blank_at(&self, start: usize, len: usize) -> bool {
        field_is_blank(&self.text, start, len)
    }

    /// Whether the whole line is whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the line is an `end` sentinel
    pub fn is_end(&self) -> bool {
        self.text.trim_start().to_ascii_lowercase().starts_with("end")
    }
}

/// Slice of `text` covering character columns `[start, start + len)`.
/// Columns past the end of the line are empty.
pub fn columns(text: &str, start: usize, len: usize) -> &str {
    let Some((begin, _)) = text.char_indices().nth(start) else {
        return "";
    };
    let end = text
        .char_indices()
        .nth(start.saturating_add(len))
        .map_or(text.len(), |(i, _)| i);
    &text[begin..end]
}

fn packed(text: &str, start: usize, len: usize) -> String {
    columns(text, start, len)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn parse_double(field: &str) -> Option<f64> {
    // Fortran-style exponents: 1.5D+02
    let normalized = field.replace(['d', 'D'], "e");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer field. Whitespace anywhere in the field is ignored; an empty or
/// malformed field reads as 0.
pub fn field_int(text: &str, start: usize, len: usize) -> i64 {
    let field = packed(text, start, len);
    if field.is_empty() {
        return 0;
    }
    field
        .parse::<i64>()
        .ok()
        .or_else(|| parse_double(&field).map(|v| v.trunc() as i64))
        .unwrap_or(0)
}

/// Floating-point field. Whitespace anywhere in the field is ignored; an
/// empty or malformed field reads as 0.0.
pub fn field_double(text: &str, start: usize, len: usize) -> f64 {
    let field = packed(text, start, len);
    if field.is_empty() {
        return 0.0;
    }
    parse_double(&field).unwrap_or(0.0)
}

/// Trimmed text field
pub fn field_str(text: &str, start: usize, len: usize) -> String {
    columns(text, start, len).trim().to_string()
}

/// Whether a field holds only whitespace
pub fn field_is_blank(text: &str, start: usize, len: usize) -> bool {
    columns(text, start, len).trim().is_empty()
}

/// Deck reader with single-line push-back
pub struct DeckReader<R: BufRead> {
    reader: R,
    line_number: usize,
    pushed_back: Option<Line>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> DeckReader<R> {
    /// Create a new deck reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: None,
        }
    }

    /// Set the fallback encoding for lines that are not valid UTF-8
    pub fn set_encoding(&mut self, encoding: Option<&'static Encoding>) {
        self.encoding = encoding;
    }

    /// Number of the last line read from the stream
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, `None` at end of stream
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        if let Some(line) = self.pushed_back.take() {
            return Ok(Some(line));
        }

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        while matches!(bytes.last(), Some(b'\n') | Some(b'\r')) {
            bytes.pop();
        }
        self.line_number += 1;

        // Try UTF-8 first, then use configured encoding or Latin-1 fallback
        let text = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => {
                let bytes = err.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };
        Ok(Some(Line::new(self.line_number, text)))
    }

    /// Return a line so the next `next_line` yields it again
    pub fn push_back(&mut self, line: Line) {
        self.pushed_back = Some(line);
    }
}
