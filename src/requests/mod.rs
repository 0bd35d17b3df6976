//! Request descriptors: decoding, validation, and the request file loader.
mod descriptor;
mod loader;


pub use descriptor::{HttpMethod, RequestBody, RequestDescriptor, validate_descriptors};
pub use loader::load_request_file;
