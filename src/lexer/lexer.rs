use std::rc::Rc;

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR, MK_TOKEN,
};

use super::{
    sanitize::Sanitizer,
    tokens::{LexState, Token},
};

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    state: LexState,
    buffer: String,
    tokens: Vec<Token>,
    sanitizer: Sanitizer,
    comment_start: (u32, u32),
    pub file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>, sanitizer: Sanitizer) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
            state: LexState::Normal,
            buffer: String::new(),
            tokens: vec![],
            sanitizer,
            comment_start: (0, 0),
            file: file_name,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    /// Consumes one character. Every newline bumps the line counter,
    /// whatever the current state.
    pub fn advance(&mut self) {
        if let Some(c) = self.at() {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn transition(&mut self, state: LexState) {
        trace!("{}:{}: {} -> {}", self.file, self.line, self.state, state);
        self.state = state;
    }

    /// Emits the buffered text as zero or more tokens on the current line.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let line = self.line;
        for value in self.sanitizer.sanitize(&self.buffer) {
            self.tokens.push(MK_TOKEN!(value, line));
        }
        self.buffer.clear();
    }

    fn scan_normal(&mut self, c: char) {
        match (c, self.peek()) {
            ('/', Some('/')) => {
                self.flush();
                self.advance_n(2);
                self.transition(LexState::LineComment);
            }
            ('/', Some('*')) => {
                self.flush();
                self.comment_start = (self.line, self.column + 1);
                self.advance_n(2);
                self.transition(LexState::BlockComment);
            }
            ('"', _) => {
                self.flush();
                self.advance();
                self.transition(LexState::StringLiteral);
            }
            ('\'', _) => {
                self.flush();
                self.advance();
                self.transition(LexState::CharLiteral);
            }
            (c, _) if c.is_whitespace() => {
                self.flush();
                self.advance();
            }
            (c, _) => {
                self.buffer.push(c);
                self.advance();
            }
        }
    }

    fn scan_line_comment(&mut self, c: char) {
        match (c, self.peek()) {
            // A backslash-newline splices the next line into the comment.
            ('\\', Some('\n')) => self.advance_n(2),
            ('\\', Some('\r')) if self.source.get(self.pos + 2) == Some(&'\n') => {
                self.advance_n(3)
            }
            ('\n', _) => {
                self.advance();
                self.transition(LexState::Normal);
            }
            _ => self.advance(),
        }
    }

    fn scan_block_comment(&mut self, c: char) -> Result<(), Error> {
        match (c, self.peek()) {
            ('*', Some('/')) => {
                self.advance_n(2);
                self.transition(LexState::Normal);
            }
            ('/', Some('*')) => {
                return Err(MK_ERROR!(
                    ErrorImpl::NestedBlockComment,
                    self,
                    self.line,
                    self.column + 1
                ));
            }
            _ => self.advance(),
        }

        Ok(())
    }

    fn scan_literal(&mut self, c: char, quote: char) {
        if c == '\\' {
            // The escaped character is never a terminator.
            self.advance_n(2);
        } else if c == quote {
            self.advance();
            self.transition(LexState::Normal);
        } else {
            self.advance();
        }
    }

    fn finish(mut self) -> Result<Vec<Token>, Error> {
        if self.state == LexState::BlockComment {
            let (line, column) = self.comment_start;
            return Err(MK_ERROR!(
                ErrorImpl::UnterminatedBlockComment,
                self,
                line,
                column
            ));
        }

        // Unterminated string and character literals run to EOF silently.
        self.flush();
        Ok(self.tokens)
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source, file, Sanitizer::default())
}

pub fn tokenize_with(
    source: String,
    file: Option<String>,
    sanitizer: Sanitizer,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file, sanitizer);

    while let Some(c) = lex.at() {
        match lex.state() {
            LexState::Normal => lex.scan_normal(c),
            LexState::LineComment => lex.scan_line_comment(c),
            LexState::BlockComment => lex.scan_block_comment(c)?,
            LexState::StringLiteral => lex.scan_literal(c, '"'),
            LexState::CharLiteral => lex.scan_literal(c, '\''),
        }
    }

    lex.finish()
}
