//! Error type shared by every fallible operation of the crate.
//!
//! Parsing a single line with [`split_field`](crate::http::field::split_field)
//! is not fallible in this sense: a line that does not match simply yields
//! `None`. The variants below cover the operations built on top of it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The line does not match `name ":" [" "] value`.
    #[error("malformed header line: {line:?}")]
    MalformedLine { line: String },

    /// The name contains a byte outside of the token set, or is empty.
    #[error("invalid header field name: {name:?}")]
    InvalidFieldName { name: String },

    #[error("header line is {len} bytes long, limit is {max}")]
    LineTooLong { len: usize, max: usize },

    #[error("header block has more than {max} fields")]
    TooManyFields { max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
