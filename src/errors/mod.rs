//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical errors the scanner can report:
//!
//! - Error structures carrying the source line they occurred on
//! - The two lexical error variants
//! - The `ErrorSink` collaborator that receives errors during a scan
//! - Error names and suggestions used when displaying diagnostics

pub mod errors;
