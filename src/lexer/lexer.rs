use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorSink},
    MK_TOKEN,
};

use super::tokens::{keyword, Literal, Token, TokenKind};

/// Single-pass scanner over a complete source text.
///
/// `start` marks the first byte of the lexeme being recognised, `current` the
/// next unconsumed byte, and `line` counts consumed newlines plus one.
/// Offsets are byte offsets and always sit on character boundaries.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Consumes the whole source and returns its tokens, terminated by EOF.
    ///
    /// Lexical errors go to `sink` and never stop the scan, so one pass
    /// reports every error in the source.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    pub fn scan_tokens<S: ErrorSink + ?Sized>(mut self, sink: &mut S) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token(sink);
        }

        self.tokens
            .push(MK_TOKEN!(TokenKind::EOF, String::new(), self.line));
        debug!(tokens = self.tokens.len(), lines = self.line, "scan finished");

        self.tokens
    }

    fn scan_token<S: ErrorSink + ?Sized>(&mut self, sink: &mut S) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '/' => {
                if self.matches('/') {
                    // Comment runs to the end of the line; the newline is left for the main loop.
                    while self.peek() != '\n' && !self.at_eof() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            '!' => {
                let kind = if self.matches('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') { TokenKind::LessEqual } else { TokenKind::Less };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(sink),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            character => self.error(sink, ErrorImpl::UnexpectedCharacter { character }),
        }
    }

    fn string<S: ErrorSink + ?Sized>(&mut self, sink: &mut S) {
        let start_line = self.line;

        while self.peek() != '"' && !self.at_eof() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            self.error(sink, ErrorImpl::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_token(TokenKind::String, Some(Literal::String(value)), start_line);
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value = self.lexeme().parse::<f64>().unwrap_or(f64::INFINITY);
        self.push_token(TokenKind::Number, Some(Literal::Number(value)), self.line);
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn error<S: ErrorSink + ?Sized>(&mut self, sink: &mut S, error_impl: ErrorImpl) {
        debug!(line = self.line, error = %error_impl, "lexical error");
        sink.report(Error::new(error_impl, self.line));
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None, self.line);
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>, line: usize) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(kind, lexeme, literal, line));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.at_eof() || self.peek() != expected {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

/// Scans `source` and returns its tokens together with every lexical error found.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut errors = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);

    (tokens, errors)
}
