//! Reader for `.properties` bundles.
//!
//! Follows the classic resource-bundle file format:
//!
//! - `key=value`, `key: value` and `key value` are all entries.
//! - Lines whose first non-blank character is `#` or `!` are comments.
//! - A line ending in an odd number of backslashes continues on the next
//!   line; leading blanks of the continuation are dropped.
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other escaped character
//!   stands for itself (`\=`, `\:`, `\ `, `\\`).
//! - A repeated key replaces the earlier value.

use std::fmt;

/// A malformed logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line where the offending logical line starts.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a `.properties` document into `(key, value)` pairs in file order.
///
/// ```
/// use glossa_catalog::properties::parse_properties;
///
/// let entries = parse_properties("# header\ngreeting = Hello\nsearch.prompt: Type here\n").unwrap();
/// assert_eq!(entries[0], ("greeting".to_string(), "Hello".to_string()));
/// assert_eq!(entries[1], ("search.prompt".to_string(), "Type here".to_string()));
/// ```
pub fn parse_properties(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut entries = Vec::new();
    let mut logical = String::new();
    let mut start_line = 0;
    let mut continuing = false;

    for (idx, physical) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = physical.trim_start_matches(is_blank);

        if !continuing {
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            start_line = line_no;
        }

        if ends_with_continuation(trimmed) {
            logical.push_str(&trimmed[..trimmed.len() - 1]);
            continuing = true;
            continue;
        }

        logical.push_str(trimmed);
        continuing = false;
        entries.push(split_entry(&logical, start_line)?);
        logical.clear();
    }

    // A trailing continuation at end of input still yields its entry.
    if continuing && !logical.is_empty() {
        entries.push(split_entry(&logical, start_line)?);
    }

    Ok(entries)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

fn ends_with_continuation(line: &str) -> bool {
    let backslashes = line.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 1
}

/// Split a logical line into an unescaped key and value.
fn split_entry(logical: &str, line: usize) -> Result<(String, String), ParseError> {
    let mut escaped = false;
    let mut key_end = logical.len();
    for (i, c) in logical.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let raw_key = &logical[..key_end];
    let mut rest = logical[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }

    Ok((unescape(raw_key, line)?, unescape(rest, line)?))
}

fn unescape(raw: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => out.push(unicode_escape(&mut chars, line)?),
            Some(other) => out.push(other),
            // Lone trailing backslash: dropped.
            None => {}
        }
    }
    Ok(out)
}

fn hex_unit(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u16, ParseError> {
    let hex: String = chars.by_ref().take(4).collect();
    (hex.len() == 4)
        .then(|| u16::from_str_radix(&hex, 16).ok())
        .flatten()
        .ok_or_else(|| ParseError {
            line,
            message: format!("malformed \\uXXXX escape: \\u{hex}"),
        })
}

/// Decodes the digits after `\u`. A high surrogate must be followed by a
/// `\uXXXX` low surrogate; the pair yields one supplementary character.
fn unicode_escape(chars: &mut std::str::Chars<'_>, line: usize) -> Result<char, ParseError> {
    let first = hex_unit(chars, line)?;
    let units = if (0xD800..0xDC00).contains(&first) {
        let mut lookahead = chars.clone();
        if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
            return Err(ParseError {
                line,
                message: format!("unpaired surrogate escape: \\u{first:04X}"),
            });
        }
        *chars = lookahead;
        vec![first, hex_unit(chars, line)?]
    } else {
        vec![first]
    };
    match char::decode_utf16(units.iter().copied()).collect::<Result<Vec<char>, _>>() {
        Ok(decoded) if decoded.len() == 1 => Ok(decoded[0]),
        _ => Err(ParseError {
            line,
            message: format!("unpaired surrogate escape: \\u{first:04X}"),
        }),
    }
}
