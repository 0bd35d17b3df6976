use std::error::Error as _;
use std::fmt;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::requests::{RequestBody, RequestDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Request,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connection error",
            TransportErrorKind::Request => "request error",
        };
        f.write_str(label)
    }
}

/// A failure below the HTTP response layer. Never raised for 4xx/5xx.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classifies a reqwest error and flattens its source chain into one
    /// readable line (reqwest's own message hides the root cause).
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Request
        };

        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message = format!("{}: {}", message, cause_text);
            }
            source = cause.source();
        }
        Self { kind, message }
    }
}

/// Sends one request and reports the received status code.
///
/// Shared read-only by every in-flight unit of a run.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no HTTP response was received.
    async fn send(&self, request: &RequestDescriptor) -> Result<u16, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<u16, TransportError> {
        let mut builder = self
            .client
            .request(request.method().into(), request.url().clone());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        // String bodies go out verbatim with no content type; only objects
        // and arrays are JSON-encoded.
        builder = match request.body() {
            Some(RequestBody::Json(value)) => builder.json(value),
            Some(RequestBody::Text(text)) => builder.body(text.clone()),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(&err))?;
        let status = response.status().as_u16();

        // Status line received: a broken body stream does not turn this into a
        // transport failure.
        if let Err(err) = drain_response_body(response).await {
            warn!(
                "Failed to read response body from {} {}: {}",
                request.method(),
                request.url(),
                err
            );
        }
        Ok(status)
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
