//! Common parser module
//!
//! Shared interfaces for the two parser implementations: the [`DocumentParser`] trait and
//! the error types both of them return.

use std::ops::Range;
use thiserror::Error;

use super::grammar::GrammarError;
use super::scanner::ScanError;
use crate::hyml::ast::{Document, Position, SourceLocation, TreeError};
use crate::hyml::lexing::LexError;

/// Deepest element nesting either parser accepts unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Errors raised while parsing a document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("element at byte {offset} nests deeper than {limit} levels")]
    TooDeep { limit: usize, offset: usize },
}

/// A token sequence the grammar does not accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {position}: {message}")]
pub struct SyntaxError {
    pub span: Range<usize>,
    pub position: Position,
    /// Display form of the offending token, `None` at end of input
    pub found: Option<String>,
    /// Names of the tokens or rules that would have been accepted
    pub expected: Vec<String>,
    pub message: String,
}

impl SyntaxError {
    pub(crate) fn from_grammar(error: GrammarError, location: &SourceLocation) -> Self {
        let span = error.span();
        let position = location.byte_to_position(span.start);
        let found = error.found().map(ToString::to_string);

        let mut expected: Vec<String> = match error.label() {
            Some(label) => vec![label.to_string()],
            None => error
                .expected()
                .map(|token| match token {
                    Some(token) => token.name().to_string(),
                    None => "end of input".to_string(),
                })
                .collect(),
        };
        expected.sort();
        expected.dedup();

        let message = match (&found, expected.is_empty()) {
            (Some(found), true) => format!("unexpected {}", found),
            (Some(found), false) => {
                format!("found {}, expected {}", found, expected.join(" or "))
            }
            (None, true) => "unexpected end of input".to_string(),
            (None, false) => format!("unexpected end of input, expected {}", expected.join(" or ")),
        };

        SyntaxError {
            span,
            position,
            found,
            expected,
            message,
        }
    }
}

/// Trait for parser implementations
pub trait DocumentParser {
    /// Parse the source text into a document
    fn parse_source(&self, source: &str) -> Result<Document, ParseError>;
}
