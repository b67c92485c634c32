use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::NestedBlockComment | ErrorImpl::UnterminatedBlockComment => {
                ErrorKind::Parse
            }
            ErrorImpl::RootNotFound { .. } | ErrorImpl::InvalidArgument { .. } => {
                ErrorKind::Usage
            }
            ErrorImpl::UnreadableFile { .. } | ErrorImpl::WriteFailed { .. } => ErrorKind::Io,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NestedBlockComment => "NestedBlockComment",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::RootNotFound { .. } => "RootNotFound",
            ErrorImpl::InvalidArgument { .. } => "InvalidArgument",
            ErrorImpl::UnreadableFile { .. } => "UnreadableFile",
            ErrorImpl::WriteFailed { .. } => "WriteFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NestedBlockComment => ErrorTip::Suggestion(String::from(
                "Multi-line comments cannot be nested within other multi-line comments in C/C++",
            )),
            ErrorImpl::UnterminatedBlockComment => ErrorTip::Suggestion(String::from(
                "Expected closing `*/` for multi-line comment, got EOF instead",
            )),
            ErrorImpl::RootNotFound { path } => ErrorTip::Suggestion(format!(
                "Specified top directory `{}` does not exist",
                path
            )),
            ErrorImpl::InvalidArgument { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnreadableFile { reason } => {
                ErrorTip::Suggestion(format!("Could not read file: {}", reason))
            }
            ErrorImpl::WriteFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.is_null() {
            write!(f, "{}", self.internal_error)
        } else if !self.position.has_line() {
            write!(f, "{}: {}", self.position.file, self.internal_error)
        } else {
            write!(
                f,
                "{}:{}: {}",
                self.position.file, self.position.line, self.internal_error
            )
        }
    }
}

impl std::error::Error for Error {}

/// Coarse classification callers use to pick an abort or continue policy.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// Malformed comment structure in the file being scanned.
    Parse,
    /// Bad root path or arguments given at startup.
    Usage,
    /// A file could not be read or results could not be written.
    Io,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("multi-line comments cannot be nested")]
    NestedBlockComment,
    #[error("unterminated multi-line comment")]
    UnterminatedBlockComment,
    #[error("root path {path:?} does not exist")]
    RootNotFound { path: String },
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("could not read file: {reason}")]
    UnreadableFile { reason: String },
    #[error("could not write results: {reason}")]
    WriteFailed { reason: String },
}
