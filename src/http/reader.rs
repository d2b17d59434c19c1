//! Reading a whole header block into a [`HeaderSet`].
//!
//! A header block is a sequence of LF or CRLF terminated lines ending with an
//! empty line (or the end of input). Both the in-memory and the async reader
//! share the same line handling:
//!
//! 1. Empty lines before the first field are ignored
//! 2. Each line is checked against `max_line_length`; the async reader never
//!    buffers more than `max_line_length` plus the CRLF terminator per line
//! 3. The line is split with [`split_field`](crate::http::field::split_field);
//!    lines that do not match are skipped or rejected depending on
//!    `skip_malformed`
//! 4. The field is stored, failing once more than `max_fields` lines have
//!    been applied
//! 5. The first empty line after a field ends the block

use async_std::io::{self, BufRead};
use async_std::prelude::*;
use std::str;

use crate::config::HeaderConfig;
use crate::error::{Error, Result};
use crate::http::field::split_field;
use crate::http::headers::HeaderSet;

#[derive(Debug, PartialEq)]
enum Step {
    Continue,
    Done,
}

struct BlockState<'c> {
    config: &'c HeaderConfig,
    started: bool,
    applied: usize,
}

impl<'c> BlockState<'c> {
    fn new(config: &'c HeaderConfig) -> Self {
        Self {
            config,
            started: false,
            applied: 0,
        }
    }

    fn feed(&mut self, line: &str, headers: &mut HeaderSet) -> Result<Step> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            return Ok(if self.started { Step::Done } else { Step::Continue });
        }
        self.started = true;

        if line.len() > self.config.max_line_length {
            return Err(Error::LineTooLong {
                len: line.len(),
                max: self.config.max_line_length,
            });
        }

        let Some(field) = split_field(line) else {
            if self.config.skip_malformed {
                tracing::debug!(line, "skipping malformed header line");
                return Ok(Step::Continue);
            }
            return Err(Error::MalformedLine {
                line: line.to_string(),
            });
        };

        if self.applied >= self.config.max_fields {
            return Err(Error::TooManyFields {
                max: self.config.max_fields,
            });
        }

        headers.set_field(field.name, field.value);
        self.applied += 1;
        Ok(Step::Continue)
    }
}

/// Parses an in-memory header block.
pub fn parse_block(raw: &str, config: &HeaderConfig) -> Result<HeaderSet> {
    let mut headers = HeaderSet::new();
    let mut state = BlockState::new(config);

    for line in raw.split('\n') {
        if state.feed(line, &mut headers)? == Step::Done {
            break;
        }
    }

    Ok(headers)
}

/// Reads header lines from `reader` into `headers` until an empty line or the
/// end of input.
///
/// Returns the number of lines that were stored. Each line read is bounded
/// by `config.read_timeout`, and by `config.max_line_length` plus the line
/// terminator: a longer line fails with [`Error::LineTooLong`] without being
/// read further.
pub async fn read_fields<R>(
    reader: &mut R,
    headers: &mut HeaderSet,
    config: &HeaderConfig,
) -> Result<usize>
where
    R: BufRead + Unpin,
{
    let mut state = BlockState::new(config);
    let limit = config.max_line_length.saturating_add(2);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let mut line_reader = (&mut *reader).take(limit as u64);
        let n = io::timeout(config.read_timeout, line_reader.read_until(b'\n', &mut buf)).await?;
        if n == 0 {
            break; // end of input
        }

        // Cap reached without a terminator, the content is already over the limit.
        if n == limit && !buf.ends_with(b"\n") {
            return Err(Error::LineTooLong {
                len: n,
                max: config.max_line_length,
            });
        }

        let line = str::from_utf8(&buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        if state.feed(line, headers)? == Step::Done {
            break;
        }
    }

    Ok(state.applied)
}
