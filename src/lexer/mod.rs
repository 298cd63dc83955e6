//! Lexical analysis module.
//!
//! This module contains the scanner that converts Lox source text into a
//! sequence of tokens for parsing. It handles:
//!
//! - Single-pass, maximal-munch tokenization of the whole source
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Line comments and whitespace handling

pub mod lexer;
pub mod tokens;
