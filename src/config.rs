use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Limits applied when reading a whole header block.
///
/// Single-line operations on [`HeaderSet`](crate::http::headers::HeaderSet)
/// are not affected by these values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub max_fields: usize,
    pub max_line_length: usize,

    /// Drop lines that do not parse instead of failing the whole block.
    /// Status lines such as `HTTP/1.1 200 OK` fall into this category.
    pub skip_malformed: bool,

    #[serde(deserialize_with = "deserialize_duration")]
    pub read_timeout: Duration,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            max_fields: 100,
            max_line_length: 8192,
            skip_malformed: true,

            read_timeout: Duration::from_secs(5),
        }
    }
}

impl HeaderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str::<HeaderConfig>(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(
                    "fail to read {}: {err}, falling back to default config",
                    path.display()
                );
                return HeaderConfig::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "fail to deserialize config file {}: {err}, falling back to default config",
                    path.display()
                );
                HeaderConfig::default()
            }
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}
