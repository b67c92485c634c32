use std::fmt::Display;

/// Interpretation mode of the scanner for the next character.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexState {
    Normal,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

impl Display for LexState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A fragment of code text found outside comments and literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    /// 1-based line on which the token was terminated.
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    pub fn debug(&self) -> String {
        format!("{:>5} | {}", self.line, self.value)
    }
}
