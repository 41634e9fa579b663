//! HTTP middleware for request processing.
//!
//! Provides error diagnostics, response hardening, and observability.

pub mod diagnostics;
pub mod security;
pub mod tracing;
