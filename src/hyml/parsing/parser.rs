//! Grammar parser
//!
//! Runs the three stages in order: tokenize, match the grammar, build the document.
//! Any lexing or grammar failure aborts the parse with no partial tree.

use std::ops::Range;

use chumsky::{Parser, Stream};

use super::common::{DocumentParser, ParseError, SyntaxError, DEFAULT_MAX_DEPTH};
use super::grammar::document;
use super::ir::ParseNode;
use crate::hyml::ast::{Document, SourceLocation};
use crate::hyml::building::TreeBuilder;
use crate::hyml::lexing::{tokenize, Token};

#[derive(Debug, Clone)]
pub struct GrammarParser {
    trim_text: bool,
    max_depth: usize,
}

impl GrammarParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim whitespace around text nodes while building
    pub fn with_trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }

    /// Fail with [`ParseError::TooDeep`] once more than `max_depth` elements are open
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let nodes = parse_nodes_within(source, self.max_depth)?;
        let doc = TreeBuilder::new(source)
            .trim_text(self.trim_text)
            .build(nodes)?;
        Ok(doc)
    }
}

impl Default for GrammarParser {
    fn default() -> Self {
        Self {
            trim_text: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DocumentParser for GrammarParser {
    fn parse_source(&self, source: &str) -> Result<Document, ParseError> {
        self.parse(source)
    }
}

/// Tokenize and match `source`, returning the parse tree without building a document
pub fn parse_nodes(source: &str) -> Result<Vec<ParseNode>, ParseError> {
    parse_nodes_within(source, DEFAULT_MAX_DEPTH)
}

/// Like [`parse_nodes`], failing once more than `max_depth` elements are open
pub fn parse_nodes_within(source: &str, max_depth: usize) -> Result<Vec<ParseNode>, ParseError> {
    let tokens = tokenize(source)?;
    check_depth(&tokens, max_depth)?;
    let eoi = source.len()..source.len();

    document()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| {
            let location = SourceLocation::new(source);
            // chumsky reports the furthest failure first
            let error = errors
                .into_iter()
                .next()
                .map(|error| SyntaxError::from_grammar(error, &location))
                .unwrap_or_else(|| SyntaxError {
                    span: 0..0,
                    position: location.byte_to_position(0),
                    found: None,
                    expected: Vec::new(),
                    message: "no parse".to_string(),
                });
            ParseError::Syntax(error)
        })
}

/// Reject token streams whose tags nest deeper than `max_depth`.
///
/// The grammar recurses once per open element, so this runs before it. Opening tags ended by
/// `>` push a level, closing tags pop one whatever their name, self-closing tags leave the
/// depth unchanged.
fn check_depth(tokens: &[(Token, Range<usize>)], max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let mut opening: Option<usize> = None;
    let mut closing = false;

    for (token, span) in tokens {
        match token {
            Token::TagOpen => opening = Some(span.start),
            Token::EndTagOpen => closing = true,
            Token::SelfClose => opening = None,
            Token::TagEnd => {
                if let Some(offset) = opening.take() {
                    depth += 1;
                    if depth > max_depth {
                        return Err(ParseError::TooDeep {
                            limit: max_depth,
                            offset,
                        });
                    }
                } else if closing {
                    depth = depth.saturating_sub(1);
                }
                closing = false;
            }
            _ => {}
        }
    }
    Ok(())
}
