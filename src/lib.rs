#![allow(clippy::module_inception)]

use std::{fmt::Write, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::ErrorSink;
pub use lexer::lexer::{tokenize, Scanner};
pub use lexer::tokens::{Literal, Token, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lox_scanner=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{format_error, get_source_line};
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_source_line() {
        let source = "Hello, world!\r\nsecond\n\nTesting { }\n";

        assert_eq!(get_source_line(source, 1), Some("Hello, world!"));
        assert_eq!(get_source_line(source, 2), Some("second"));
        assert_eq!(get_source_line(source, 3), Some(""));
        assert_eq!(get_source_line(source, 4), Some("Testing { }"));
        assert_eq!(get_source_line(source, 5), Some(""));
        assert_eq!(get_source_line(source, 6), None);
        assert_eq!(get_source_line(source, 0), None);
    }

    #[test]
    fn test_format_error() {
        let source = "var a = 1;\n  print a # b;\n";
        let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '#' }, 2);

        let expected = [
            "Error: UnexpectedCharacter (`#` does not start any token)",
            "-> test.lox",
            "  |",
            "2 | print a # b;",
            "[line 2] Error: Unexpected character.",
            "",
        ]
        .join("\n");

        assert_eq!(format_error(&error, source, "test.lox"), expected);
    }
}

/// Renders a lexical error together with the source line it was found on.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedCharacter (`#` does not start any token)
        -> final.lox
           |
        20 | var a = #;
        [line 20] Error: Unexpected character.
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    if let Some(line_text) = get_source_line(source, error.get_line()) {
        let _ = writeln!(out, "{} | {}", line_string, line_text.trim());
    }
    let _ = writeln!(out, "{}", error);

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}
