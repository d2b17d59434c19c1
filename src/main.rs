//! Reads a raw header block from stdin and prints the parsed fields.
//!
//! Usage: `rustyheaders [config.toml]`

use async_std::io::{self, BufReader};
use std::process::ExitCode;

use rustyheaders::{HeaderConfig, HeaderSet, join_field, read_fields};

#[async_std::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => HeaderConfig::from_file(path),
        None => HeaderConfig::default(),
    };

    let mut reader = BufReader::new(io::stdin());
    let mut headers = HeaderSet::new();

    match read_fields(&mut reader, &mut headers, &config).await {
        Ok(applied) => tracing::debug!(applied, fields = headers.count(), "header block parsed"),
        Err(err) => {
            tracing::error!("failed to read header block: {err}");
            return ExitCode::FAILURE;
        }
    }

    for (name, value) in &headers {
        println!("{}", join_field(name, value));
    }

    ExitCode::SUCCESS
}
