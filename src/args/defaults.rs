pub(crate) const DEFAULT_USER_AGENT: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

/// One pass over the request list.
pub(super) const DEFAULT_REPEAT: usize = 1;
