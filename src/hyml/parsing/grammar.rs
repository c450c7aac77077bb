//! Grammar rules for the grammar parser
//!
//! The production rules, written as chumsky combinators over the flattened token stream:
//!
//! ```text
//! start      := node*
//! node       := element | code_block | text
//! element    := "<" IDENT attribute* ( ">" node* "</" IDENT ">" | "/>" )
//! attribute  := IDENT ( "=" value )?
//! value      := STRING | code_block
//! ```
//!
//! The element rule is left-factored: both element forms share the `"<" IDENT attribute*`
//! prefix and the token after it picks the form. Every alternative in the grammar is decided
//! by a single token of lookahead, so a parse never backtracks.
//!
//! Token shapes (IDENT, STRING, code blocks, text runs) are declared in
//! [tokens](crate::hyml::lexing::tokens).

use chumsky::prelude::*;
use std::ops::Range;

use super::ir::{ElementBody, ParseNode, ParsedAttribute, ParsedValue, Spanned};
use crate::hyml::lexing::Token;

/// Type alias for grammar errors
pub(crate) type GrammarError = Simple<Token>;

fn ident() -> impl Parser<Token, Spanned<String>, Error = GrammarError> + Clone {
    filter_map(|span: Range<usize>, token: Token| match token {
        Token::Ident(name) => Ok((name, span)),
        other => Err(GrammarError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("identifier")
}

fn string() -> impl Parser<Token, String, Error = GrammarError> + Clone {
    filter_map(|span: Range<usize>, token: Token| match token {
        Token::Str(value) => Ok(value),
        other => Err(GrammarError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("string")
}

fn code_block() -> impl Parser<Token, Spanned<String>, Error = GrammarError> + Clone {
    filter_map(|span: Range<usize>, token: Token| match token {
        Token::Code(source) => Ok((source, span)),
        other => Err(GrammarError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("code block")
}

fn text() -> impl Parser<Token, Spanned<String>, Error = GrammarError> + Clone {
    filter_map(|span: Range<usize>, token: Token| match token {
        Token::Text(text) => Ok((text, span)),
        other => Err(GrammarError::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("text")
}

/// `IDENT ( "=" value )?`
fn attribute() -> impl Parser<Token, ParsedAttribute, Error = GrammarError> + Clone {
    let value = string()
        .map(ParsedValue::Str)
        .or(code_block().map(|(source, _)| ParsedValue::Code(source)));

    ident()
        .then(just(Token::Equals).ignore_then(value).or_not())
        .map(|(name, value)| ParsedAttribute { name, value })
}

/// `start := node*`, anchored at end of input
pub(crate) fn document() -> impl Parser<Token, Vec<ParseNode>, Error = GrammarError> {
    let node = recursive(|node| {
        let matched = just(Token::TagEnd)
            .ignore_then(node.repeated())
            .then_ignore(just(Token::EndTagOpen))
            .then(ident())
            .then_ignore(just(Token::TagEnd))
            .map(|(children, closing)| ElementBody::Matched { children, closing });

        let self_closing = just(Token::SelfClose).to(ElementBody::SelfClosing);

        let element = just(Token::TagOpen)
            .ignore_then(ident())
            .then(attribute().repeated())
            .then(matched.or(self_closing))
            .map_with_span(|((name, attributes), body), span| ParseNode::Element {
                name,
                attributes,
                body,
                span,
            });

        let code = code_block().map(|(source, span)| ParseNode::Code { source, span });
        let text = text().map(|(text, span)| ParseNode::Text { text, span });

        choice((element, code, text))
    });

    node.repeated().then_ignore(end())
}
