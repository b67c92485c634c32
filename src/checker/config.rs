use std::path::PathBuf;

use crate::{
    advisories::advisories::Advisories,
    errors::errors::{Error, ErrorImpl},
    lexer::sanitize::SanitizeOptions,
    matcher::matcher::{MatchMode, Matcher},
    walker::walker::DEFAULT_EXTENSIONS,
    Position,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    /// Without the leading dot.
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub match_mode: MatchMode,
    /// Also report the cautionary mapping, not just deprecations.
    pub cautionary: bool,
    /// Report parse errors and move on instead of aborting the run.
    pub keep_going: bool,
    /// Print each file's tokens instead of matching them.
    pub dump_tokens: bool,
    pub sanitize: SanitizeOptions,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Config {
        Config {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            recursive: true,
            match_mode: MatchMode::default(),
            cautionary: true,
            keep_going: false,
            dump_tokens: false,
            sanitize: SanitizeOptions::default(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.root.exists() {
            return Err(Error::new(
                ErrorImpl::RootNotFound {
                    path: self.root.display().to_string(),
                },
                Position::null(),
            ));
        }

        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(Error::new(
                ErrorImpl::InvalidArgument {
                    message: String::from("at least one file extension is required"),
                },
                Position::null(),
            ));
        }

        if self
            .sanitize
            .separators
            .chars()
            .any(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(Error::new(
                ErrorImpl::InvalidArgument {
                    message: String::from("separators cannot contain identifier characters"),
                },
                Position::null(),
            ));
        }

        Ok(())
    }

    /// Builds the matcher for this run from the built-in mappings.
    pub fn matcher(&self) -> Matcher {
        let mut advisories = vec![Advisories::deprecated()];
        if self.cautionary {
            advisories.push(Advisories::cautionary());
        }

        Matcher::new(advisories, self.match_mode)
    }
}
