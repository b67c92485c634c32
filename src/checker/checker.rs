use std::{
    fs,
    io::{self, Write},
    path::Path,
    rc::Rc,
    time::Instant,
};

use log::{debug, info, warn};

use crate::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize_with, sanitize::Sanitizer, tokens::Token},
    matcher::matcher::{Finding, Matcher},
    walker::walker::get_files_from_dir,
    Position,
};

use super::config::Config;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub findings: usize,
}

/// Reads a file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|err| {
        Error::new(
            ErrorImpl::UnreadableFile {
                reason: err.to_string(),
            },
            Position::file_only(&Rc::new(path.display().to_string())),
        )
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn scan_source(source: &str, file: &str, sanitizer: &Sanitizer) -> Result<Vec<Token>, Error> {
    let start = Instant::now();
    let tokens = tokenize_with(source.to_string(), Some(file.to_string()), sanitizer.clone())?;
    debug!("scanned {} tokens from {} in {:?}", tokens.len(), file, start.elapsed());

    Ok(tokens)
}

pub fn check_source(
    source: &str,
    file: &str,
    matcher: &Matcher,
    sanitizer: &Sanitizer,
) -> Result<Vec<Finding>, Error> {
    let tokens = scan_source(source, file, sanitizer)?;
    Ok(matcher.evaluate(file, &tokens))
}

pub fn check_file(
    path: &Path,
    matcher: &Matcher,
    sanitizer: &Sanitizer,
) -> Result<Vec<Finding>, Error> {
    let source = read_source(path)?;
    check_source(&source, &path.display().to_string(), matcher, sanitizer)
}

fn write_failed(err: io::Error) -> Error {
    Error::new(
        ErrorImpl::WriteFailed {
            reason: err.to_string(),
        },
        Position::null(),
    )
}

fn write_line<W: Write>(out: &mut W, line: impl std::fmt::Display) -> Result<(), Error> {
    writeln!(out, "{}", line).map_err(write_failed)
}

/// Checks every matching file under the configured root, writing one line
/// per finding to `out`, and flushes it once every file is done.
///
/// Errors for individual files are rendered to stderr as they happen. A
/// parse error is returned (ending the run) unless `keep_going` is set;
/// unreadable files never end the run.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Summary, Error> {
    config.validate()?;

    let matcher = config.matcher();
    let sanitizer = Sanitizer::new(&config.sanitize);
    let files = get_files_from_dir(&config.root, &config.extensions, config.recursive);
    let start = Instant::now();

    let mut summary = Summary::default();

    for path in files {
        let file = path.display().to_string();

        let source = match read_source(&path) {
            Ok(source) => source,
            Err(err) => {
                warn!("{}", err);
                display_error(&err, None);
                summary.files_failed += 1;
                continue;
            }
        };

        let tokens = match scan_source(&source, &file, &sanitizer) {
            Ok(tokens) => tokens,
            Err(err) => {
                display_error(&err, Some(&source));
                if !config.keep_going {
                    return Err(err);
                }
                warn!("skipping {} after parse error", file);
                summary.files_failed += 1;
                continue;
            }
        };

        summary.files_scanned += 1;

        if config.dump_tokens {
            write_line(out, format!("{}:", file))?;
            for token in &tokens {
                write_line(out, token.debug())?;
            }
            continue;
        }

        for finding in matcher.evaluate(&file, &tokens) {
            write_line(out, &finding)?;
            summary.findings += 1;
        }
    }

    out.flush().map_err(write_failed)?;

    info!(
        "checked {} files ({} failed) with {} findings in {:?}",
        summary.files_scanned,
        summary.files_failed,
        summary.findings,
        start.elapsed()
    );

    Ok(summary)
}
