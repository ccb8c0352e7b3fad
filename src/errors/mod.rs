//! Error types and error handling for the front end.
//!
//! This module defines the error types returned by lexing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Lexical, syntactic and input error variants
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;
