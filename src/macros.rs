//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored lexer rule with its handler
//!
//! These macros reduce boilerplate in the lexer rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer rule that only matches at the start of the remaining input.
///
/// The pattern is wrapped in `\A(?:...)`, so alternations inside it keep
/// their leftmost-first order.
///
/// # Arguments
///
/// * `$kind` - The TokenKind produced by the rule
/// * `$regex` - The rule's pattern, as a string literal
/// * `$handler` - The handler that turns the match into a token
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Whitespace, r"[\r\t ]+", token_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:literal, $handler:expr) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new(concat!(r"\A(?:", $regex, ")"))
                .expect(concat!("invalid lexer pattern: ", $regex)),
            handler: $handler,
        }
    };
}
