//! Conversion between a raw header line and its name/value pair.

use std::fmt;

use crate::http::token::is_token_byte;

/// A field name and value extracted from one raw header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Splits a raw header line into field name and field value.
///
/// The line must be `name ":" [" "] value` where `name` is one or more
/// [token bytes](crate::http::token). At most one space after the colon is
/// consumed; the rest of the line is the value, kept verbatim (it may be
/// empty, may contain colons, and trailing whitespace is not trimmed).
///
/// Returns `None` when the line does not have that shape.
pub fn split_field(line: &str) -> Option<HeaderField> {
    // A single trailing LF is tolerated, any other LF ends the match.
    let line = line.strip_suffix('\n').unwrap_or(line);

    let name_len = line.bytes().take_while(|b| is_token_byte(*b)).count();
    if name_len == 0 {
        return None;
    }

    // Token bytes are ASCII, so `name_len` is a char boundary.
    let (name, rest) = line.split_at(name_len);
    let rest = rest.strip_prefix(':')?;
    let value = rest.strip_prefix(' ').unwrap_or(rest);

    if value.contains('\n') {
        return None;
    }

    Some(HeaderField::new(name, value))
}

/// Joins a field name and value into a header line, `"<name>: <value>"`.
///
/// Neither part is validated or escaped.
pub fn join_field(name: &str, value: &str) -> String {
    format!("{}: {}", name, value)
}
