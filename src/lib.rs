//! Header field container for HTTP clients.
//!
//! Raw header lines are split into name/value pairs with
//! [`split_field`], stored in an insertion-ordered [`HeaderSet`], and joined
//! back with [`join_field`]. Whole header blocks can be read with
//! [`parse_block`] or, from an async reader, with [`read_fields`].

pub mod config;
pub mod error;
pub mod http;

pub use config::HeaderConfig;
pub use error::{Error, Result};
pub use http::field::{HeaderField, join_field, split_field};
pub use http::headers::{HeaderSet, Iter};
pub use http::reader::{parse_block, read_fields};
pub use http::token::is_token;
