//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, the backtracking
//! primitives every grammar rule is written with, and the public entry
//! points. Rules are plain functions, one per grammar production:
//!
//! - Sequences chain expectations with `?`
//! - Ordered choices go through [`Parser::choice`]
//! - Optional and repeated parts go through [`Parser::attempt`]
//!
//! Both backtracking primitives share one rule: an alternative that fails
//! after consuming more than one token is committed, and its error is
//! returned instead of trying what comes next. Every failed expectation is
//! recorded, and errors always describe the furthest token reached. Errors
//! other than a token mismatch (a bad number, nesting past
//! [`MAX_NESTING`]) are never backtracked over.

use std::{collections::BTreeSet, io::Read, sync::Arc};

use tracing::{debug, trace};

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, DEFAULT_FILE},
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::decl::parse_ast;

/// A grammar rule, as handed to [`Parser::choice`].
pub type Rule<T> = fn(&mut Parser) -> Result<T, Error>;

/// Number of tokens an alternative may consume and still be backtracked.
const LOOKAHEAD: usize = 1;

/// Deepest nesting of expressions, prefix operators, blocks and member
/// lists accepted before parsing fails with `NestingTooDeep`.
pub const MAX_NESTING: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Index of the furthest token an expectation failed at
    furthest: usize,
    /// Everything that was expected at `furthest`
    expected: BTreeSet<String>,
    /// Number of nested rules currently open
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::start_of(Arc::from(DEFAULT_FILE)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            furthest: 0,
            expected: BTreeSet::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Index of the current token.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Whether the current token spells `text`.
    pub fn peek_literal(&self, text: &str) -> bool {
        self.current_token().is_literal(text)
    }

    /// Consumes the current token if it spells `text`.
    pub fn expect_literal(&mut self, text: &str) -> Result<Token, Error> {
        if self.peek_literal(text) {
            return Ok(self.advance());
        }

        self.record(format!("{:?}", text));
        Err(self.error())
    }

    /// Consumes the current token if it spells any of `texts`.
    pub fn expect_one_of(&mut self, texts: &[&str]) -> Result<Token, Error> {
        if texts.iter().any(|text| self.peek_literal(text)) {
            return Ok(self.advance());
        }

        for text in texts {
            self.record(format!("{:?}", text));
        }
        Err(self.error())
    }

    /// Consumes the current token if it is of `kind`.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == kind {
            return Ok(self.advance());
        }

        self.record(describe_kind(kind));
        Err(self.error())
    }

    /// Tries `rule`, rewinding and yielding `None` when it fails within the
    /// lookahead. A failure past the lookahead is returned as is.
    pub fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<Option<T>, Error> {
        let checkpoint = self.pos;

        match rule(self) {
            Ok(value) => Ok(Some(value)),
            Err(error) if !error.is_recoverable() => Err(error),
            Err(_) => {
                self.backtrack(checkpoint)?;
                Ok(None)
            }
        }
    }

    /// Applies `rule` as many times as it matches.
    pub fn repeat<T>(
        &mut self,
        rule: impl Fn(&mut Parser) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut items = vec![];
        while let Some(item) = self.attempt(&rule)? {
            items.push(item);
        }
        Ok(items)
    }

    /// `rule ( separator rule )*`, at least one item.
    pub fn separated<T>(&mut self, separator: &str, rule: Rule<T>) -> Result<Vec<T>, Error> {
        let mut items = vec![rule(self)?];
        items.extend(self.repeat(|parser| {
            parser.expect_literal(separator)?;
            rule(parser)
        })?);
        Ok(items)
    }

    /// `( rule ( separator rule )* )?`
    pub fn optional_separated<T>(
        &mut self,
        separator: &str,
        rule: Rule<T>,
    ) -> Result<Vec<T>, Error> {
        Ok(self
            .attempt(|parser| parser.separated(separator, rule))?
            .unwrap_or_default())
    }

    /// Consumes `text` when present.
    pub fn optional_literal(&mut self, text: &str) -> Result<bool, Error> {
        Ok(self.attempt(|parser| parser.expect_literal(text))?.is_some())
    }

    /// Tries each alternative in order and returns the first match.
    pub fn choice<T>(&mut self, alternatives: &[Rule<T>]) -> Result<T, Error> {
        let checkpoint = self.pos;

        for alternative in alternatives {
            match alternative(self) {
                Ok(value) => return Ok(value),
                Err(error) if !error.is_recoverable() => return Err(error),
                Err(_) => self.backtrack(checkpoint)?,
            }
        }

        Err(self.error())
    }

    /// Runs `rule` one nesting level deeper, failing once the level passes
    /// [`MAX_NESTING`].
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING {
            debug!(at = self.pos, "nesting limit reached");
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Rewinds to `checkpoint`, or fails with the deepest error when the
    /// cursor moved past the lookahead.
    fn backtrack(&mut self, checkpoint: usize) -> Result<(), Error> {
        if self.pos > checkpoint + LOOKAHEAD {
            debug!(
                from = checkpoint,
                at = self.pos,
                "alternative failed past lookahead, committing"
            );
            return Err(self.error());
        }

        trace!(from = self.pos, to = checkpoint, "backtracking");
        self.pos = checkpoint;
        Ok(())
    }

    fn record(&mut self, expectation: String) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.furthest {
            self.expected.insert(expectation);
        }
    }

    /// Builds an error from the furthest failure recorded so far.
    pub fn error(&self) -> Error {
        let token = &self.tokens[self.furthest.min(self.tokens.len() - 1)];
        let found = match token.kind {
            TokenKind::EOF => String::from("EOF"),
            _ => token.value.clone(),
        };

        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: self.expected.iter().cloned().collect(),
                found,
            },
            token.span.start.clone(),
        )
    }
}

fn describe_kind(kind: TokenKind) -> String {
    match kind {
        TokenKind::EOF => String::from("EOF"),
        kind => format!("<{}>", kind.to_string().to_lowercase()),
    }
}

/// Options for a parsing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name recorded in every position, `<input>` when unset.
    pub file: Option<String>,
}

impl ParseOptions {
    pub fn with_file(file: impl Into<String>) -> Self {
        ParseOptions {
            file: Some(file.into()),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_FILE)
    }
}

/// Reads `reader` to the end and parses it.
pub fn parse<R: Read>(reader: R) -> Result<Ast, Error> {
    parse_with_options(reader, &ParseOptions::default())
}

/// Parses source text held in memory.
pub fn parse_string(source: &str) -> Result<Ast, Error> {
    parse_string_with_options(source, &ParseOptions::default())
}

pub fn parse_with_options<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Ast, Error> {
    let mut source = String::new();
    reader.read_to_string(&mut source).map_err(|error| {
        Error::new(
            ErrorImpl::Io {
                message: error.to_string(),
            },
            Position::start_of(Arc::from(options.file_name())),
        )
    })?;

    parse_string_with_options(&source, options)
}

pub fn parse_string_with_options(source: &str, options: &ParseOptions) -> Result<Ast, Error> {
    let tokens = tokenize(source, Some(options.file_name()))?;
    let mut parser = Parser::new(tokens);

    let ast = parse_ast(&mut parser)?;
    debug!(
        file = options.file_name(),
        declarations = ast.declarations.len(),
        "parsed source"
    );

    Ok(ast)
}
