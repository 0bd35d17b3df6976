use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::args::{DEFAULT_USER_AGENT, TesterArgs};
use crate::error::{AppError, AppResult, HttpError};

/// Transport configuration fixed for the whole run.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub disable_keepalive: bool,
}

impl From<&TesterArgs> for ClientSettings {
    fn from(args: &TesterArgs) -> Self {
        Self {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            disable_keepalive: args.disable_keepalive,
        }
    }
}

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .timeout(settings.request_timeout)
        .connect_timeout(settings.connect_timeout)
        .user_agent(DEFAULT_USER_AGENT);

    if settings.disable_keepalive {
        client_builder = client_builder
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)));
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
