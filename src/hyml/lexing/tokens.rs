//! Token definitions for the hyml grammar
//!
//! hyml needs two token sets. Between tags anything but `<`, `{` and `}` is text, while inside a
//! tag the same characters form identifiers, strings and punctuation. Each context gets its own
//! logos enum and the tokenizer morphs between them (see
//! [base_tokenization](super::base_tokenization)). Both then flatten into [`Token`], which is
//! what the grammar consumes.

use logos::Logos;
use std::fmt;

/// Tokens recognized between tags
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum ContentToken {
    #[token("<")]
    TagOpen,

    #[token("</")]
    EndTagOpen,

    // The first `}` closes the block: nested braces are not supported
    #[regex(r"\{[^}]*\}")]
    CodeBlock,

    #[regex(r"[^<{}]+")]
    Text,
}

/// Tokens recognized inside `<...>`
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TagToken {
    #[token(">")]
    TagEnd,

    #[token("/>")]
    SelfClose,

    #[token("=")]
    Equals,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r#"'([^'\\]|\\.)*'"#)]
    Str,

    #[regex(r"\{[^}]*\}")]
    CodeBlock,
}

/// Flattened token stream consumed by the grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `<`
    TagOpen,
    /// `</`
    EndTagOpen,
    /// `>`
    TagEnd,
    /// `/>`
    SelfClose,
    /// `=`
    Equals,
    Ident(String),
    /// String literal with its quotes already removed
    Str(String),
    /// Inner text of a `{...}` block, braces removed, otherwise untouched
    Code(String),
    /// Raw text run, surrounding whitespace included
    Text(String),
}

impl Token {
    /// Grammar name of the token, as used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Token::TagOpen => "'<'",
            Token::EndTagOpen => "'</'",
            Token::TagEnd => "'>'",
            Token::SelfClose => "'/>'",
            Token::Equals => "'='",
            Token::Ident(_) => "identifier",
            Token::Str(_) => "string",
            Token::Code(_) => "code block",
            Token::Text(_) => "text",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "identifier `{}`", name),
            Token::Str(value) => write!(f, "string {:?}", value),
            Token::Code(source) => write!(f, "code block `{{{}}}`", source),
            Token::Text(text) => write!(f, "text {:?}", text.trim()),
            other => f.write_str(other.name()),
        }
    }
}
