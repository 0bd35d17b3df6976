use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(ValidationError::UnknownMethod {
                value: s.to_owned(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Request payload. Objects and lists are sent as JSON, strings as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Text(String),
}

/// A validated, immutable request. Only [`RequestDescriptor::from_value`]
/// builds one, so `method` and `url` are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl RequestDescriptor {
    /// Validates one decoded request entry. `index` is the entry's position
    /// in its batch and only feeds error messages.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the entry when the method or URL
    /// is missing or malformed, or when headers or body have the wrong shape.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, ValidationError> {
        let entry = value
            .as_object()
            .ok_or(ValidationError::RequestNotObject { index })?;

        let method_raw = required_str(entry, index, "method")?;
        let method = method_raw
            .parse::<HttpMethod>()
            .map_err(|_unknown| ValidationError::InvalidMethod {
                index,
                value: method_raw.to_owned(),
            })?;

        let url = parse_url(index, required_str(entry, index, "url")?)?;
        let headers = parse_headers(index, entry.get("headers"))?;
        let body = parse_body(index, entry.get("body"))?;

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[must_use]
    pub const fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }
}

/// Validates a whole batch. The first invalid entry rejects the batch.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first entry that fails.
pub fn validate_descriptors(values: &[Value]) -> Result<Vec<RequestDescriptor>, ValidationError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| RequestDescriptor::from_value(index, value))
        .collect()
}

fn required_str<'entry>(
    entry: &'entry Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'entry str, ValidationError> {
    match entry.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { index, field }),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(ValidationError::FieldNotString { index, field }),
    }
}

fn parse_url(index: usize, raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl { index });
    }
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        index,
        url: trimmed.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::UnsupportedScheme {
            index,
            scheme: other.to_owned(),
        }),
    }
}

fn parse_headers(
    index: usize,
    value: Option<&Value>,
) -> Result<Vec<(String, String)>, ValidationError> {
    let map = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(ValidationError::HeadersNotObject { index }),
    };

    let mut headers = Vec::with_capacity(map.len());
    for (name, value) in map {
        let Value::String(value) = value else {
            return Err(ValidationError::HeaderValueNotString {
                index,
                name: name.clone(),
            });
        };
        if HeaderName::from_bytes(name.as_bytes()).is_err() || HeaderValue::from_str(value).is_err()
        {
            return Err(ValidationError::InvalidHeader {
                index,
                name: name.clone(),
            });
        }
        headers.push((name.clone(), value.clone()));
    }
    Ok(headers)
}

fn parse_body(index: usize, value: Option<&Value>) -> Result<Option<RequestBody>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(RequestBody::Text(text.clone()))),
        Some(json @ (Value::Object(_) | Value::Array(_))) => Ok(Some(RequestBody::Json(json.clone()))),
        Some(Value::Bool(_) | Value::Number(_)) => Err(ValidationError::InvalidBodyType { index }),
    }
}
