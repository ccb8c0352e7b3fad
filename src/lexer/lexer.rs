use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// File name used in positions when the caller does not name the source.
pub const DEFAULT_FILE: &str = "<input>";

pub type RegexHandler = fn(&mut Lexer<'_>, TokenKind, &str) -> Result<(), Error>;

pub struct RegexPattern {
    kind: TokenKind,
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Lexical rules in priority order; the first rule matching at the
    /// current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(TokenKind::Comment, r"//.*|(?s:/\*.*?\*/)", token_handler),
        MK_PATTERN!(TokenKind::Backslash, r"\\", token_handler),
        MK_PATTERN!(TokenKind::Whitespace, r"[\r\t ]+", token_handler),
        MK_PATTERN!(TokenKind::Modifier, r"\b(pub|override|static)\b", token_handler),
        MK_PATTERN!(
            TokenKind::Keyword,
            r"\b(in|switch|case|default|if|enum|alias|let|fn|break|continue|for|throws|import|new)\b",
            token_handler
        ),
        MK_PATTERN!(TokenKind::Ident, r"\b[[:alpha:]_][[:alnum:]_]*\b", token_handler),
        MK_PATTERN!(TokenKind::Number, r"\b[0-9]+(\.[0-9]+)?\b", token_handler),
        MK_PATTERN!(TokenKind::String, r#""(\\.|[^"])*"|'[^']*'"#, string_handler),
        MK_PATTERN!(TokenKind::Newline, r"\n", token_handler),
        // Two-character operators must come before the single-character class.
        MK_PATTERN!(
            TokenKind::Operator,
            r"->|%=|>=|<=|\^=|&&|\|\||==|!=|\+=|-=|\*=|/=|[-=+*/<>%^!]",
            token_handler
        ),
        MK_PATTERN!(TokenKind::Punct, r"[\[\]`~()@#$\{\}:;?.,]", token_handler),
    ];
}

pub struct Lexer<'s> {
    tokens: Vec<Token>,
    source: &'s str,
    pos: usize,
    line: u32,
    column: u32,
    file: Arc<str>,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str, file: Option<&str>) -> Lexer<'s> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: Arc::from(file.unwrap_or(DEFAULT_FILE)),
        }
    }

    pub fn position(&self) -> Position {
        Position {
            file: Arc::clone(&self.file),
            offset: self.pos as u32,
            line: self.line,
            column: self.column,
        }
    }

    /// Consumes `n` bytes, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let consumed = &self.source[self.pos..self.pos + n];
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Pushes a token spanning the next `matched.len()` bytes and consumes them.
    fn emit(&mut self, kind: TokenKind, value: String, matched: &str) {
        let start = self.position();
        self.advance_n(matched.len());
        let end = self.position();
        self.push(MK_TOKEN!(kind, value, Span { start, end }));
    }

    /// Produces the full token stream, trivia included, terminated by `EOF`.
    pub fn scan(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            let remaining = self.remainder();
            let rule = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .filter(|found| !found.as_str().is_empty())
                    .map(|found| (pattern, found.as_str()))
            });

            match rule {
                Some((pattern, matched)) => (pattern.handler)(&mut self, pattern.kind, matched)?,
                None => return Err(self.unmatched()),
            }
        }

        let eof = self.position();
        self.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: eof.clone(),
                end: eof
            }
        ));
        Ok(self.tokens)
    }

    fn unmatched(&self) -> Error {
        let error_impl = match self.at() {
            Some('"') | Some('\'') => ErrorImpl::UnterminatedString,
            other => ErrorImpl::UnrecognisedToken {
                token: other.map(String::from).unwrap_or_default(),
            },
        };
        Error::new(error_impl, self.position())
    }
}

fn token_handler(lexer: &mut Lexer, kind: TokenKind, matched: &str) -> Result<(), Error> {
    lexer.emit(kind, matched.to_string(), matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, kind: TokenKind, matched: &str) -> Result<(), Error> {
    let content = &matched[1..matched.len() - 1];

    // Single-quoted strings are raw.
    let value = if matched.starts_with('"') {
        unescape(content).map_err(|sequence| {
            Error::new(ErrorImpl::InvalidEscape { sequence }, lexer.position())
        })?
    } else {
        content.to_string()
    };

    lexer.emit(kind, value, matched);
    Ok(())
}

/// Resolves backslash escapes, returning the offending sequence on failure.
///
/// Accepts `\a \b \f \n \r \t \v \\ \"`, `\xhh`, `\uhhhh`, `\Uhhhhhhhh`
/// and three-digit octal `\ooo` up to `\377`.
fn unescape(literal: &str) -> Result<String, String> {
    let mut result = String::with_capacity(literal.len());
    let mut chars = literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let Some(escaped) = chars.next() else {
            return Err(String::from("\\"));
        };

        let simple = match escaped {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            'a' => Some('\x07'),
            'b' => Some('\x08'),
            'f' => Some('\x0c'),
            'v' => Some('\x0b'),
            '\\' | '"' => Some(escaped),
            _ => None,
        };
        if let Some(simple) = simple {
            result.push(simple);
            continue;
        }

        let (radix, width) = match escaped {
            'x' => (16, 2),
            'u' => (16, 4),
            'U' => (16, 8),
            '0'..='7' => (8, 3),
            other => return Err(format!("\\{}", other)),
        };

        // Octal escapes start at the character already read.
        let mut digits = String::new();
        if radix == 8 {
            digits.push(escaped);
        }
        while digits.len() < width {
            match chars.peek() {
                Some(digit) if digit.is_digit(radix) => {
                    digits.push(*digit);
                    chars.next();
                }
                _ => break,
            }
        }

        let decoded = u32::from_str_radix(&digits, radix)
            .ok()
            .filter(|value| digits.len() == width && (radix == 16 || *value <= 0o377))
            .and_then(char::from_u32);

        match decoded {
            Some(decoded) => result.push(decoded),
            None if radix == 8 => return Err(format!("\\{}", digits)),
            None => return Err(format!("\\{}{}", escaped, digits)),
        }
    }

    Ok(result)
}

/// Lexes `source` and drops the elided kinds (comments, whitespace,
/// backslashes and newlines).
pub fn tokenize(source: &str, file: Option<&str>) -> Result<Vec<Token>, Error> {
    let tokens: Vec<Token> = Lexer::new(source, file)
        .scan()?
        .into_iter()
        .filter(|token| !token.kind.is_elided())
        .collect();

    tracing::debug!(tokens = tokens.len(), "tokenized source");

    Ok(tokens)
}
