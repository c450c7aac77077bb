use thiserror::Error;

/// Errors raised while tokenizing hyml source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated tag starting at byte {offset}: missing '>'")]
    UnterminatedTag { offset: usize },

    #[error("unterminated code block starting at byte {offset}: missing '}}'")]
    UnterminatedCodeBlock { offset: usize },

    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEnd { offset: usize },
}

impl LexError {
    /// Byte offset the error points at
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedTag { offset }
            | LexError::UnterminatedCodeBlock { offset }
            | LexError::UnterminatedString { offset }
            | LexError::UnexpectedCharacter { offset, .. }
            | LexError::UnexpectedEnd { offset } => *offset,
        }
    }
}
