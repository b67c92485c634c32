//! Matching of scanned tokens against advisory mappings.
//!
//! The matcher never looks at source text. It consumes the token sequence
//! produced by the lexer and reports each token that names an entry of one
//! of its mappings.

pub mod matcher;
