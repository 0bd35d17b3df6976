use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Values only fill in options that were not given on the command line.
///
/// # Errors
///
/// Returns an error when config values are out of range.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "requests_file")
        && let Some(path) = config.requests_file.clone()
    {
        args.requests_file = Some(path);
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(concurrency, "concurrency")?;
    }

    if !is_cli(matches, "repeat")
        && let Some(repeat) = config.repeat
    {
        args.repeat = repeat;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = to_duration(timeout, "timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = to_duration(timeout, "connect_timeout")?;
    }

    if !is_cli(matches, "disable_keepalive")
        && let Some(disable) = config.disable_keepalive
    {
        args.disable_keepalive = disable;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn to_duration(value: &DurationValue, field: &str) -> AppResult<std::time::Duration> {
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidDuration {
            field: field.to_owned(),
            source: err,
        })
    })
}
