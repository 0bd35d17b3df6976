mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;
mod report;
mod requests;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
