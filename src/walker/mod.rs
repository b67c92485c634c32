//! Discovery of the source files to check under a root path.

pub mod walker;
