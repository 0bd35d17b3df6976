use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Request {index}: not a JSON object.")]
    RequestNotObject { index: usize },
    #[error("Request {index}: missing required field '{field}'.")]
    MissingField { index: usize, field: &'static str },
    #[error("Request {index}: field '{field}' must be a string.")]
    FieldNotString { index: usize, field: &'static str },
    #[error("Request {index}: invalid HTTP method '{value}'.")]
    InvalidMethod { index: usize, value: String },
    #[error("Invalid HTTP method '{value}'. Use GET, POST, PUT, DELETE, PATCH, HEAD, or OPTIONS.")]
    UnknownMethod { value: String },
    #[error("Request {index}: URL must not be empty.")]
    EmptyUrl { index: usize },
    #[error("Request {index}: invalid URL '{url}': {source}")]
    InvalidUrl {
        index: usize,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Request {index}: unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { index: usize, scheme: String },
    #[error("Request {index}: headers must be an object of string values.")]
    HeadersNotObject { index: usize },
    #[error("Request {index}: header '{name}' must have a string value.")]
    HeaderValueNotString { index: usize, name: String },
    #[error("Request {index}: invalid header '{name}'.")]
    InvalidHeader { index: usize, name: String },
    #[error("Request {index}: body must be an object, array, or string.")]
    InvalidBodyType { index: usize },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Missing request file (set --requests-file or provide requests_file in config).")]
    MissingRequestsFile,
}
