use crate::GaugeError;

use super::{scan, tokens, TokenKind};

#[test]
fn test_scan_nunez() {
    assert_eq!(scan("й"), Err(GaugeError::Lexical { offset: 0 }));
}

#[test]
fn non_ascii_offset_is_in_bytes() {
    assert_eq!(scan("'й' й"), Err(GaugeError::Lexical { offset: 5 }));
}

#[test]
fn invalid_prime() {
    assert_eq!(scan("'abc"), Err(GaugeError::Lexical { offset: 0 }));
}

#[test]
fn strings_are_greedy() {
    let words = scan("'a' 'b'").unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text(), Some("a' 'b"));
}

#[test]
fn empty_string() {
    let words = scan("''").unwrap();
    assert_eq!(words[0].text(), Some(""));
}

#[test]
fn only_whitespace() {
    assert!(scan(" \t\r").unwrap().is_empty());
    assert_eq!(tokens("").count(), 0);
}

#[test]
fn trailing_dot() {
    let all: Vec<_> = tokens("3.").collect();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1], Err(GaugeError::Lexical { offset: 1 }));
}

#[test]
fn names_keep_spaces() {
    let words = scan("( x )").unwrap();
    assert_eq!(words[0].name(), Some(" x "));
}

#[test]
fn unit_must_be_alphabetic() {
    assert_eq!(scan("(x, 5)"), Err(GaugeError::Lexical { offset: 0 }));
    let words = scan("(x,knots)").unwrap();
    assert_eq!(words[0].unit(), Some("knots"));
}

#[test]
fn digits_then_name() {
    let words = scan("2pi").unwrap();
    assert_eq!(words[0].kind, TokenKind::Int);
    assert_eq!(words[1].kind, TokenKind::Identifier);
}
