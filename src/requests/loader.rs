use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult, RequestFileError};

use super::descriptor::{RequestDescriptor, validate_descriptors};

/// Reads a request file and validates every entry.
///
/// Accepts either a bare JSON array or an object whose `requests` field is
/// an array; any other keys of that object are ignored.
///
/// # Errors
///
/// Returns an error when the file is missing, unreadable, not JSON, has the
/// wrong top-level shape, or holds an invalid descriptor.
pub fn load_request_file(path: &Path) -> AppResult<Vec<RequestDescriptor>> {
    if !path.exists() {
        return Err(AppError::request_file(RequestFileError::NotFound {
            path: path.to_path_buf(),
        }));
    }
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::request_file(RequestFileError::Read {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let document: Value = serde_json::from_str(&content).map_err(|err| {
        AppError::request_file(RequestFileError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    })?;

    let entries = match &document {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("requests") {
            Some(Value::Array(entries)) => entries,
            Some(
                Value::Null
                | Value::Bool(_)
                | Value::Number(_)
                | Value::String(_)
                | Value::Object(_),
            )
            | None => {
                return Err(AppError::request_file(RequestFileError::InvalidShape {
                    path: path.to_path_buf(),
                }));
            }
        },
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(AppError::request_file(RequestFileError::InvalidShape {
                path: path.to_path_buf(),
            }));
        }
    };

    let descriptors = validate_descriptors(entries)?;
    debug!(
        "Loaded {} request descriptors from {}",
        descriptors.len(),
        path.display()
    );
    Ok(descriptors)
}
