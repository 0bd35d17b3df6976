//! Outcome aggregation and histogram utilities.
mod collector;
mod histogram;
mod types;


pub use collector::setup_outcome_collector;
pub use histogram::LatencyHistogram;
pub use types::{Outcome, ResultAccumulator};
