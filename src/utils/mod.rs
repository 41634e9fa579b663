//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Random short code generation
//! - [`validation`] - Creation request validation

pub mod code_generator;
pub mod validation;
