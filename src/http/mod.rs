//! Header field handling: token grammar, single-line codec, the
//! [`HeaderSet`](headers::HeaderSet) container and the block reader.

pub mod field;
pub mod headers;
pub mod reader;
pub mod token;
