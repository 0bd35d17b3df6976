use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, parse_duration_arg};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "requests")]
    pub requests_file: Option<String>,
    pub concurrency: Option<usize>,
    #[serde(alias = "repeats")]
    pub repeat: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub disable_keepalive: Option<bool>,
    pub output_format: Option<OutputFormat>,
}

/// Either whole seconds or a `<number><unit>` string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
