//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! token stream into an [`Ast`](crate::ast::ast::Ast). One function per
//! grammar rule, with ordered choice and one token of lookahead:
//!
//! - decl: the root, declarations and their members
//! - stmt: blocks, control flow and switch cases
//! - expr: precedence climbing over unary terms, literals and references
//! - types: declared type names and type parameter lists
//! - lookups: operator binding powers
//!
//! Errors always report the expected set at the furthest token reached.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
