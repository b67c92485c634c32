//! Lexical scanning of C/C++ source text.
//!
//! This module contains the scanner that splits a source file into
//! line-numbered textual tokens for the matcher. It handles:
//!
//! - Line comments, block comments, string and character literals,
//!   none of which ever contribute to a token
//! - Escape sequences inside literals
//! - Line tracking across multi-line constructs
//! - Sanitization of punctuation and template arguments around identifiers

pub mod lexer;
pub mod sanitize;
pub mod tokens;
