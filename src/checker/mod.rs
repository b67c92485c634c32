//! Driving a whole check: configuration, per-file scanning and matching,
//! and writing findings to an output sink.
//!
//! A parse error aborts the run unless `keep_going` is set. A file that
//! cannot be read is reported and skipped.

pub mod checker;
pub mod config;

#[cfg(test)]
mod tests;
