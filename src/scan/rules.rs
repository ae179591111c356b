use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Float,
    Int,
    Operator,
    Identifier,
    Whitespace,
    VarRead,
    VarWrite,
}

#[derive(Debug)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Rule {
        Rule {
            kind,
            pattern: Regex::new(&format!("^(?:{pattern})")).expect("static lexer pattern"),
        }
    }
}

lazy_static! {
    /// Tried in order; the first rule that matches at the offset wins, even if a
    /// later one would match more. Inside a rule the longer alternatives come first.
    ///
    /// Consequence: `&&` and `||` scan as two bitwise tokens, so the logical
    /// operators are only reachable by their spelled-out names.
    pub static ref RULES: Vec<Rule> = {
        use TokenKind::*;
        vec![
            Rule::new(String, r"'(.*)'"),
            Rule::new(Float, r"[0-9]+\.[0-9]+"),
            Rule::new(Int, r"[0-9]+"),
            Rule::new(Operator, r">>|<<|[&|^~]"),
            Rule::new(Operator, r"==|!=|&&|\|\||!"),
            Rule::new(Operator, r">=|<=|[<>]"),
            Rule::new(Operator, r"\+\+|--"),
            Rule::new(Operator, r"/-/|\?"),
            Rule::new(Operator, r"[+\-*/%]"),
            Rule::new(Identifier, r"[a-zA-Z_]+"),
            Rule::new(Whitespace, r"\s+"),
            Rule::new(VarRead, r"\(([a-zA-Z_: ]+)(,\s*([a-zA-Z]+))?\)"),
            Rule::new(VarWrite, r"\(>([a-zA-Z_: ]+)(,\s*([a-zA-Z]+))?\)"),
        ]
    };
}
