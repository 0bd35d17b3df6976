//! Core library for the `volley` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, request descriptor loading, bounded
//! concurrent execution, outcome aggregation, and report rendering. The
//! primary user-facing interface is the `volley` command-line application.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;
pub mod requests;
