//! HTTP transport and bounded-concurrency batch execution.
mod client;
mod executor;
mod transport;
mod work;


pub use client::{ClientSettings, build_client};
pub use executor::{ExecutionSettings, execute_run, run_load};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportErrorKind};
pub use work::{ExecutionUnit, build_work_list};
