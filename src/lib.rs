#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod advisories;
pub mod checker;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod matcher;
pub mod walker;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: &Rc<String>) -> Self {
        Position {
            line,
            column,
            file: Rc::clone(file),
        }
    }

    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }

    /// A position naming a file but no location inside it.
    pub fn file_only(file: &Rc<String>) -> Self {
        Position::new(0, 0, file)
    }

    pub fn is_null(&self) -> bool {
        self.file.as_str() == "<null>"
    }

    pub fn has_line(&self) -> bool {
        self.line > 0
    }
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<String> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r').to_string())
}


/// Formats an error, quoting the offending source line when it is available.
pub fn render_error(error: &Error, source: Option<&str>) -> String {
    // Error: NestedBlockComment (tip)
    // -> file.c:20:9
    //    |
    // 20 | /* a /* b */
    //    | -----^

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    if position.is_null() {
        return out;
    }

    if !position.has_line() {
        let _ = writeln!(out, "-> {}", position.file);
        return out;
    }

    let _ = writeln!(out, "-> {}:{}:{}", position.file, position.line, position.column);

    let line_text = match source.and_then(|s| get_line_at_position(s, position.line)) {
        Some(text) => text,
        None => return out,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(1)
        .saturating_sub(removed_whitespace)
        + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

pub fn display_error(error: &Error, source: Option<&str>) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
