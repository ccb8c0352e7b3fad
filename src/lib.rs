#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod visitor;

extern crate regex;

pub use crate::parser::parser::{
    parse, parse_string, parse_string_with_options, parse_with_options, ParseOptions,
};

/// A location in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and the column
/// counts characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: Arc<str>,
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start_of(file: Arc<str>) -> Self {
        Position {
            file,
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of that line and the byte offset
/// of `position` within it.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input sits just past the last character of the last line.
    if pos == source.len() {
        let last = source.rsplit('\n').next().unwrap_or_default();
        let line_number = source.matches('\n').count() + 1;
        return Some((line_number, last.to_string(), last.len()));
    }

    None
}


/// Renders `error` as a caret diagnostic against `source`.
///
/// ```text
/// Error: UnexpectedToken (...)
/// -> final.lang
///   |
/// 1 | let a = #;
///   | --------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        out.push_str(&format!("   {}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos.min(line_text.len())].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
