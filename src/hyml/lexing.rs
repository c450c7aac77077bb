//! Lexer
//!
//!     Tokenization for the grammar parser. The scanner parser does not use this module: it
//!     reads characters directly.
//!
//! Two Contexts
//!
//!     The hybrid syntax is not regular across tag boundaries. Between tags, `=` or a quote is
//!     just text; inside a tag they are structure. Rather than one token set with ad-hoc
//!     exceptions, there are two logos enums, one per context, and the tokenizer morphs the
//!     lexer from one to the other at `<`, `</`, `>` and `/>`. See [tokens] for the token
//!     declarations and [base_tokenization] for the switching.
//!
//!     The output is a flat `Vec<(Token, Range<usize>)>`. Byte ranges are carried untouched into
//!     the IR so nodes and diagnostics can point back into the source.
//!
//! Code Blocks
//!
//!     A code block runs from `{` to the first `}`. Nested braces are not supported and
//!     `{ {a} }` lexes as the block `{ {a}` followed by a stray `}`, which is an error.

pub mod base_tokenization;
pub mod common;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use common::LexError;
pub use tokens::Token;
