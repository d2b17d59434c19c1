//! HTTP header field container.
//!
//! [`HeaderSet`] stores header fields as `name -> value` pairs in an ordered
//! map, so insertion order is also iteration and serialization order.
//! Names are compared by exact string match: `Accept` and `accept` are two
//! different fields. Setting a name that already exists replaces the value
//! in place and keeps the field at its original position.
//!
//! Names are only checked against the [token grammar](crate::http::token)
//! when they come from a raw line ([`HeaderSet::parse_line`],
//! [`split_field`]) or through [`HeaderSet::try_set_field`].
//! [`HeaderSet::set_field`] accepts any name, so direct field injection
//! bypasses name-grammar validation.
//!
//! Iteration goes through [`HeaderSet::iter`], which hands out a new
//! independent iterator on every call; nested traversals do not share any
//! position.

use indexmap::IndexMap;
use indexmap::map;
use std::fmt;
use std::iter::FusedIterator;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::http::field::{join_field, split_field};
use crate::http::token::is_token;

#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    fields: IndexMap<String, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Inserts or overwrites a field. The name is not validated.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Same as [`set_field`](Self::set_field), but rejects names that are not
    /// tokens.
    pub fn try_set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if !is_token(&name) {
            return Err(Error::InvalidFieldName { name });
        }

        self.fields.insert(name, value.into());
        Ok(())
    }

    /// Parses a raw header line and stores the resulting field.
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        let field = split_field(line).ok_or_else(|| Error::MalformedLine {
            line: line.to_string(),
        })?;

        self.fields.insert(field.name, field.value);
        Ok(())
    }

    /// All fields, in insertion order.
    ///
    /// The map is borrowed immutably; clone it to keep a snapshot.
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the value of `name`, or `default` when the field is missing.
    pub fn get_field_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get_field(name).unwrap_or(default)
    }

    /// Removes every field.
    pub fn flush(&mut self) {
        self.fields.clear();
    }

    /// Number of distinct field names.
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }

    /// Serializes every field as `name: value\r\n`, without the empty line
    /// that terminates a header section.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in self {
            result.push_str(&join_field(name, value));
            result.push_str("\r\n");
        }
        result
    }

    pub fn content_length(&self) -> Option<u64> {
        self.get_field("Content-Length")?.parse().ok()
    }

    /// Parses an HTTP-date field such as `Date` or `Expires`.
    pub fn date(&self, name: &str) -> Option<SystemTime> {
        httpdate::parse_http_date(self.get_field(name)?).ok()
    }

    /// Stores `time` as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
    pub fn set_date(&mut self, name: impl Into<String>, time: SystemTime) {
        self.set_field(name, httpdate::fmt_http_date(time));
    }
}

/// Two sets are equal when they hold the same fields in the same order.
impl PartialEq for HeaderSet {
    fn eq(&self, other: &Self) -> bool {
        self.fields.iter().eq(other.fields.iter())
    }
}

impl Eq for HeaderSet {}

impl fmt::Display for HeaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for HeaderSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set_field(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = HeaderSet::new();
        headers.extend(iter);
        headers
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(name, value)` pairs of a [`HeaderSet`], in insertion
/// order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
