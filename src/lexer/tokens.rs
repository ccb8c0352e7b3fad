use std::fmt::Display;

use crate::Span;

/// Reserved modifier spellings, lexed as [`TokenKind::Modifier`].
pub const MODIFIERS: [&str; 3] = ["pub", "override", "static"];

/// Reserved keyword spellings, lexed as [`TokenKind::Keyword`].
pub const KEYWORDS: [&str; 15] = [
    "in", "switch", "case", "default", "if", "enum", "alias", "let", "fn", "break", "continue",
    "for", "throws", "import", "new",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Elided before parsing
    Comment,
    Backslash,
    Whitespace,
    Newline,

    Modifier,
    Keyword,
    Ident,
    Number,
    String,
    Operator,
    Punct,
}

impl TokenKind {
    /// Kinds the lexer produces but the grammar never sees.
    pub fn is_elided(&self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::Backslash | TokenKind::Whitespace | TokenKind::Newline
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::String => write!(f, "{}({:?})", self.kind, self.value),
            _ => write!(f, "{}({})", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether this token spells the grammar literal `text`.
    ///
    /// String tokens never match, their value is unquoted content.
    pub fn is_literal(&self, text: &str) -> bool {
        !self.is_one_of_many(&[TokenKind::String, TokenKind::EOF]) && self.value == text
    }
}
