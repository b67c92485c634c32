//! Error types and error handling for the checker.
//!
//! This module defines the error types used while scanning and checking
//! source files. It includes:
//!
//! - Error structures with source position information
//! - A closed set of error variants grouped into parse, usage and I/O kinds
//! - Error names and suggestions used when rendering errors

pub mod errors;
