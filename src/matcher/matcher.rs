use std::fmt::Display;

use log::debug;

use crate::{
    advisories::advisories::{Advisories, Category},
    lexer::tokens::Token,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum MatchMode {
    /// The whole token must equal an identifier.
    #[default]
    Exact,
    /// The token only has to contain an identifier. Noisier.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file: String,
    pub line: u32,
    pub category: Category,
    pub identifier: String,
    pub message: String,
}

impl Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: line {} - {}", self.file, self.line, self.message)
    }
}

pub struct Matcher {
    advisories: Vec<Advisories>,
    mode: MatchMode,
}

impl Matcher {
    pub fn new(advisories: Vec<Advisories>, mode: MatchMode) -> Matcher {
        Matcher { advisories, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn advisories(&self) -> &[Advisories] {
        &self.advisories
    }

    /// Looks a single token up in one mapping, yielding the matched identifier and message.
    fn lookup<'a>(
        &self,
        advisories: &'a Advisories,
        token: &Token,
    ) -> Option<(&'a str, &'a str)> {
        match self.mode {
            MatchMode::Exact => advisories.get_entry(&token.value),
            MatchMode::Substring => advisories
                .iter()
                .find(|(identifier, _)| token.value.contains(identifier)),
        }
    }

    /// Reports every token that names an advisory. Each mapping is consulted
    /// independently and yields at most one finding per token.
    pub fn evaluate(&self, file: &str, tokens: &[Token]) -> Vec<Finding> {
        let mut findings = vec![];

        for token in tokens {
            for advisories in &self.advisories {
                if let Some((identifier, message)) = self.lookup(advisories, token) {
                    debug!(
                        "{}:{}: `{}` matched {} `{}`",
                        file,
                        token.line,
                        token.value,
                        advisories.category(),
                        identifier
                    );

                    findings.push(Finding {
                        file: file.to_string(),
                        line: token.line,
                        category: advisories.category(),
                        identifier: identifier.to_string(),
                        message: message.to_string(),
                    });
                }
            }
        }

        findings
    }
}
