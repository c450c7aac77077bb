//! Core tokenization using logos
//!
//! Walks the source with [`ContentToken`] and morphs the lexer into [`TagToken`] at every `<`
//! or `</`, morphing back once the tag is closed by `>` or `/>`. Spans are byte ranges into
//! the input.
//!
//! Text runs made only of whitespace are dropped here: whitespace between constructs carries
//! no meaning in the grammar.

use super::common::LexError;
use super::tokens::{ContentToken, TagToken, Token};
use logos::{Lexer, Logos};
use std::ops::Range;

/// Tokenize a full source string into the flattened grammar token stream
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut tokens = Vec::new();
    let mut content = ContentToken::lexer(source);

    while let Some(result) = content.next() {
        let span = content.span();
        match result {
            Ok(ContentToken::TagOpen) | Ok(ContentToken::EndTagOpen) => {
                let opener = if content.slice() == "<" {
                    Token::TagOpen
                } else {
                    Token::EndTagOpen
                };
                tokens.push((opener, span.clone()));
                let mut tag = content.morph::<TagToken>();
                lex_tag(&mut tag, span.start, &mut tokens)?;
                content = tag.morph();
            }
            Ok(ContentToken::CodeBlock) => {
                tokens.push((Token::Code(strip_delimiters(content.slice())), span));
            }
            Ok(ContentToken::Text) => {
                let text = content.slice();
                if !text.trim().is_empty() {
                    tokens.push((Token::Text(text.to_string()), span));
                }
            }
            Err(()) => return Err(content_error(content.slice(), span.start)),
        }
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Consume tag-mode tokens up to and including the `>` or `/>` that ends the tag
fn lex_tag<'s>(
    tag: &mut Lexer<'s, TagToken>,
    tag_start: usize,
    tokens: &mut Vec<(Token, Range<usize>)>,
) -> Result<(), LexError> {
    loop {
        let Some(result) = tag.next() else {
            return Err(LexError::UnterminatedTag { offset: tag_start });
        };
        let span = tag.span();
        let slice = tag.slice();
        let token = match result {
            Ok(TagToken::TagEnd) => Token::TagEnd,
            Ok(TagToken::SelfClose) => Token::SelfClose,
            Ok(TagToken::Equals) => Token::Equals,
            Ok(TagToken::Ident) => Token::Ident(slice.to_string()),
            Ok(TagToken::Str) => Token::Str(strip_delimiters(slice)),
            Ok(TagToken::CodeBlock) => Token::Code(strip_delimiters(slice)),
            Err(()) => return Err(tag_error(slice, span.start)),
        };
        let closes = matches!(token, Token::TagEnd | Token::SelfClose);
        tokens.push((token, span));
        if closes {
            return Ok(());
        }
    }
}

/// Drop the first and last character (quotes or braces); both are single-byte ASCII
fn strip_delimiters(slice: &str) -> String {
    slice[1..slice.len() - 1].to_string()
}

fn content_error(slice: &str, offset: usize) -> LexError {
    match slice.chars().next() {
        Some('{') => LexError::UnterminatedCodeBlock { offset },
        Some(found) => LexError::UnexpectedCharacter { found, offset },
        None => LexError::UnexpectedEnd { offset },
    }
}

fn tag_error(slice: &str, offset: usize) -> LexError {
    match slice.chars().next() {
        Some('{') => LexError::UnterminatedCodeBlock { offset },
        Some('"') | Some('\'') => LexError::UnterminatedString { offset },
        Some(found) => LexError::UnexpectedCharacter { found, offset },
        None => LexError::UnexpectedEnd { offset },
    }
}
