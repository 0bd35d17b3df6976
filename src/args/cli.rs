use clap::Parser;
use std::time::Duration;

use super::defaults::DEFAULT_REPEAT;
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async HTTP batch load tester - fires a fixed set of request descriptors under a concurrency cap and summarizes the results."
)]
pub struct TesterArgs {
    /// JSON file holding the request descriptors (array or {"requests": [...]}).
    /// Object and array bodies are sent as JSON; string bodies are sent verbatim.
    #[arg(long = "requests-file", short = 'f')]
    pub requests_file: Option<String>,

    /// Maximum number of requests in flight at once
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Number of passes over the full request list
    #[arg(long = "repeat", short = 'n', default_value_t = DEFAULT_REPEAT)]
    pub repeat: usize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Connection timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Disable connection reuse between requests
    #[arg(long = "disable-keepalive")]
    pub disable_keepalive: bool,

    /// Report format
    #[arg(long = "output-format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
