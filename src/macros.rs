//! Utility macros for the checker.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a positioned Error for the file being scanned
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The token's sanitized text
/// * `$line` - The 1-based line the token ended on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("gets".to_string(), 12);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $line:expr) => {
        Token {
            value: $value,
            line: $line,
        }
    };
}

/// Creates an Error positioned at a line and column of the lexer's file.
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::NestedBlockComment, lexer, line, column));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($impl:expr, $lexer:expr, $line:expr, $column:expr) => {
        Error::new($impl, Position::new($line, $column, &$lexer.file))
    };
}
