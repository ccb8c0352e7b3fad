//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered table of regex rules
//! - Recognition of modifiers, keywords, identifiers, literals and operators
//! - Token position tracking (byte offset, line, column) for error reporting
//! - Comments, whitespace and newlines, which are elided before parsing

pub mod lexer;
pub mod tokens;
