//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a parser front end would, check
//! the scanner's invariants over generated sources, and run the token-dump
//! binary against real files.

use std::{
    fs,
    io::Write,
    process::{Command, Stdio},
};

use lox_scanner::{tokenize, Literal, Scanner, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "\"[a-z \\n]{0,5}\"",
        prop::sample::select(vec![
            "(", ")", "{", "}", ",", ".", "-", "+", ";", "/", "*", "!", "!=", "=", "==", ">",
            ">=", "<", "<=",
        ])
        .prop_map(String::from),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "\n", "\t", "\r\n", " // note\n", "  "])
}

proptest! {
    #[test]
    fn scan_always_ends_with_single_eof(source in any::<String>()) {
        let (tokens, _) = tokenize(&source);

        prop_assert!(!tokens.is_empty());
        let last = &tokens[tokens.len() - 1];
        prop_assert_eq!(last.kind, TokenKind::EOF);
        prop_assert_eq!(last.lexeme.as_str(), "");
        prop_assert!(last.literal.is_none());
        prop_assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);
        prop_assert_eq!(last.line, source.matches('\n').count() + 1);
    }

    #[test]
    fn lexemes_appear_in_source_order(source in any::<String>()) {
        let (tokens, _) = tokenize(&source);

        let mut offset = 0;
        let mut line = 1;
        for token in &tokens[..tokens.len() - 1] {
            let found = source[offset..].find(token.lexeme.as_str());
            prop_assert!(found.is_some(), "lexeme {:?} not found after {}", token.lexeme, offset);
            offset += found.unwrap_or(0) + token.lexeme.len();

            prop_assert!(token.line >= line);
            line = token.line;
        }
    }

    #[test]
    fn well_formed_source_is_fully_covered(
        pieces in prop::collection::vec((fragment(), separator()), 0..24)
    ) {
        let mut source = String::new();
        let mut expected = Vec::new();
        for (fragment, separator) in &pieces {
            let line = source.matches('\n').count() + 1;
            source.push_str(fragment);
            source.push_str(separator);
            expected.push((fragment.clone(), line));
        }

        let (tokens, errors) = tokenize(&source);

        prop_assert!(errors.is_empty());
        prop_assert_eq!(tokens.len(), expected.len() + 1);
        for (token, (lexeme, line)) in tokens.iter().zip(&expected) {
            prop_assert_eq!(&token.lexeme, lexeme);
            prop_assert_eq!(token.line, *line);
        }
    }

    #[test]
    fn numbers_carry_their_value(whole in 0u32..100_000, fraction in prop::option::of(0u32..1000)) {
        let source = match fraction {
            Some(fraction) => format!("{}.{}", whole, fraction),
            None => whole.to_string(),
        };
        let (tokens, _) = tokenize(&source);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].literal.clone(), Some(Literal::Number(source.parse::<f64>().unwrap())));
    }
}

#[test]
fn test_scan_program_with_errors() {
    let source = "var greeting = \"hi\";\nif (greeting != nil) { print greeting; } # \nreturn 10.5 / 2 @";
    let mut errors = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::BangEqual,
            TokenKind::Nil,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Return,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );

    let lines: Vec<usize> = errors.iter().map(|error| error.get_line()).collect();
    assert_eq!(lines, vec![2, 3]);
    assert_eq!(tokens[3].literal, Some(Literal::String("hi".to_string())));
    assert_eq!(tokens[17].literal, Some(Literal::Number(10.5)));
    assert_eq!(tokens[20].line, 3);
}

#[test]
fn test_binary_dumps_tokens() {
    let path = std::env::temp_dir().join(format!("lox_scanner_ok_{}.lox", std::process::id()));
    fs::write(&path, "print 1 + x;\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lox_scanner"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "PRINT print null\nNUMBER 1 1.0\nPLUS + null\nIDENTIFIER x null\nSEMICOLON ; null\nEOF  null\n"
    );
}

#[test]
fn test_binary_reports_lexical_errors() {
    let path = std::env::temp_dir().join(format!("lox_scanner_err_{}.lox", std::process::id()));
    fs::write(&path, "a\n\"open").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lox_scanner"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "IDENTIFIER a null\nEOF  null\n"
    );
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("[line 2] Error: Unterminated string."));
}

#[test]
fn test_binary_rejects_extra_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_lox_scanner"))
        .args(["one.lox", "two.lox"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn test_prompt_keeps_going_after_errors() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lox_scanner"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"print 1;\n#\nx\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("> "));
    assert!(stdout.contains("NUMBER 1 1.0"));
    assert!(stdout.contains("IDENTIFIER x null"));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("[line 1] Error: Unexpected character."));
}

#[test]
fn test_binary_missing_file_exits_with_io_error() {
    let path = std::env::temp_dir().join(format!("lox_scanner_missing_{}.lox", std::process::id()));

    let output = Command::new(env!("CARGO_BIN_EXE_lox_scanner"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(74));
    assert!(output.stdout.is_empty());
}
