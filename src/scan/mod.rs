mod rules;

#[cfg(test)]
mod test_weird;

use log::trace;

use crate::GaugeError;

pub use rules::{Rule, TokenKind, RULES};

type Pos = (usize, usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// sub-matches of the rule, group 1 first; `None` for groups that didn't take part
    pub captures: Vec<Option<String>>,
    /// byte offsets into the line
    pub span: Pos,
}

impl Token {
    /// The dispatch key: operators and identifiers are case-insensitive.
    pub fn key(&self) -> String {
        self.lexeme.to_lowercase()
    }

    fn capture(&self, group: usize) -> Option<&str> {
        self.captures.get(group)?.as_deref()
    }

    /// the inside of a string literal, verbatim
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            TokenKind::String => self.capture(0),
            _ => None,
        }
    }

    /// the variable a read or write expression refers to
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            TokenKind::VarRead | TokenKind::VarWrite => self.capture(0),
            _ => None,
        }
    }

    /// the unit annotation of `(name, unit)`, if any
    pub fn unit(&self) -> Option<&str> {
        match self.kind {
            TokenKind::VarRead | TokenKind::VarWrite => self.capture(2),
            _ => None,
        }
    }
}

/// Find the first rule matching exactly at `offset`.
pub fn match_at(line: &str, offset: usize) -> Option<Token> {
    let rest = line.get(offset..)?;
    RULES.iter().find_map(|rule| {
        let caps = rule.pattern.captures(rest)?;
        let whole = caps.get(0).expect("group 0 always participates");
        Some(Token {
            kind: rule.kind,
            lexeme: whole.as_str().to_string(),
            captures: caps
                .iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect(),
            span: (offset, offset + whole.end()),
        })
    })
}

/// Streaming tokenizer: each token is produced only when asked for, so the
/// caller can act on it before the next one is matched. Ends after the first
/// lexical error.
pub struct Tokens<'a> {
    line: &'a str,
    offset: usize,
    failed: bool,
}

pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens {
        line,
        offset: 0,
        failed: false,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, GaugeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.line.len() {
            return None;
        }
        match match_at(self.line, self.offset) {
            Some(token) => {
                trace!("token: {:?}", token);
                self.offset = token.span.1;
                Some(Ok(token))
            }
            None => {
                self.failed = true;
                Some(Err(GaugeError::Lexical {
                    offset: self.offset,
                }))
            }
        }
    }
}

/// Tokenize a whole line up front, dropping whitespace.
pub fn scan(line: &str) -> Result<Vec<Token>, GaugeError> {
    tokens(line)
        .filter(|t| !matches!(t, Ok(Token { kind: TokenKind::Whitespace, .. })))
        .collect()
}
