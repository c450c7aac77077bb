//! Parsing module for hyml
//!
//! Two independent parsers turn source text into the same [`Document`] model:
//!
//! - **Scanner** ([`ScannerParser`]): a character scanner with an explicit stack of open
//!   elements. Tolerant of malformed input, no self-closing tags, string-only attributes.
//!   Closing tag names are checked only under [`ClosingPolicy::Strict`].
//! - **Grammar** ([`GrammarParser`]): the full pipeline.
//!     1. **Lexing**: logos tokenization (see [lexing](crate::hyml::lexing))
//!     2. **Analysis**: chumsky grammar producing IR nodes (see [`grammar`] and [`ir`])
//!     3. **Building**: IR to document (see [building](crate::hyml::building))
//!
//! The two share no code beyond the document model and [`ParseError`].
//!
//! ## Terminology
//!
//! - **parse**: the entire process, from source text to document
//! - **analyze/analysis**: the grammar matching phase specifically
//! - **build**: document construction from IR specifically
//!
//! ## Entry points
//!
//! [`parse_document`] uses the grammar parser with default settings. [`parse_with`] picks the
//! parser described by a [`ParserConfig`], usually loaded through [config](crate::hyml::config).

pub mod common;
pub mod grammar;
pub mod ir;
pub mod parser;
pub mod scanner;

use serde::Deserialize;

pub use common::{DocumentParser, ParseError, SyntaxError, DEFAULT_MAX_DEPTH};
pub use parser::GrammarParser;
pub use scanner::{ClosingPolicy, ScanError, ScannerParser};

pub use crate::hyml::ast::Document;
use crate::hyml::config::ParserConfig;

/// Which parser implementation to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Scanner,
    #[default]
    Grammar,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Scanner => "scanner",
            Strategy::Grammar => "grammar",
        }
    }
}

/// Parse with the grammar parser and default settings
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    GrammarParser::new().parse(source)
}

/// Parse with the strategy and options from `config`
pub fn parse_with(source: &str, config: &ParserConfig) -> Result<Document, ParseError> {
    parser_for(config).parse_source(source)
}

/// Build the parser `config` describes
pub fn parser_for(config: &ParserConfig) -> Box<dyn DocumentParser> {
    log::debug!(
        "using {} parser (closing_policy={:?}, trim_text={}, max_depth={})",
        config.strategy.name(),
        config.closing_policy,
        config.trim_text,
        config.max_depth
    );
    match config.strategy {
        Strategy::Scanner => Box::new(
            ScannerParser::with_policy(config.closing_policy).with_max_depth(config.max_depth),
        ),
        Strategy::Grammar => Box::new(
            GrammarParser::new()
                .with_trim_text(config.trim_text)
                .with_max_depth(config.max_depth),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_selects_strategy() {
        let scanner = ParserConfig {
            strategy: Strategy::Scanner,
            ..ParserConfig::default()
        };
        // The scanner has no self-closing form, the grammar parser does
        let doc = parse_with("<br/>", &scanner).unwrap();
        assert_eq!(doc.root().child(0).unwrap().tag(), Some("br/"));

        let doc = parse_with("<br/>", &ParserConfig::default()).unwrap();
        assert_eq!(doc.root().child(0).unwrap().tag(), Some("br"));
    }

    #[test]
    fn test_parse_with_passes_options() {
        let strict = ParserConfig {
            strategy: Strategy::Scanner,
            closing_policy: ClosingPolicy::Strict,
            ..ParserConfig::default()
        };
        assert!(matches!(
            parse_with("<a></b>", &strict),
            Err(ParseError::Scan(ScanError::MismatchedClosingTag { .. }))
        ));

        let trimmed = ParserConfig {
            trim_text: true,
            ..ParserConfig::default()
        };
        let doc = parse_with("<p>  x  </p>", &trimmed).unwrap();
        assert_eq!(doc.root().child(0).unwrap().child(0).unwrap().value(), Some("x"));
    }

    #[test]
    fn test_parse_with_passes_depth_limit() {
        let shallow = ParserConfig {
            max_depth: 2,
            ..ParserConfig::default()
        };
        assert!(parse_with("<a><b>x</b></a>", &shallow).is_ok());
        assert_eq!(
            parse_with("<a><b><c>x</c></b></a>", &shallow),
            Err(ParseError::TooDeep { limit: 2, offset: 6 })
        );

        let scanner = ParserConfig {
            strategy: Strategy::Scanner,
            ..shallow
        };
        assert_eq!(
            parse_with("<a><b><c>x</c></b></a>", &scanner),
            Err(ParseError::TooDeep { limit: 2, offset: 6 })
        );
    }

    #[test]
    fn test_parse_document_uses_grammar() {
        let doc = parse_document("<a>text</b>").unwrap();
        assert_eq!(doc.diagnostics().len(), 1);
    }
}
