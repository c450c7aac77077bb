//! Scanner parser
//!
//! A single left-to-right pass over the raw characters, no tokens and no lookahead beyond the
//! next `>` or `<`. The current insertion point is the top of an explicit stack of open
//! elements; an empty stack means the root.
//!
//! The scanner is deliberately loose:
//!
//! - attributes are whitespace-separated `key=value` pairs; quotes at either end of a value
//!   are stripped and tokens without `=` are dropped.
//! - self-closing syntax is not understood, `<br/>` opens an element named `br/`.
//! - under [`ClosingPolicy::Permissive`] closing tag names are never checked and every
//!   closing tag pops exactly one level.

use memchr::memchr;
use serde::Deserialize;
use thiserror::Error;

use super::common::{DocumentParser, ParseError, DEFAULT_MAX_DEPTH};
use crate::hyml::ast::{AttributeValue, Attributes, Document, NodeId};

/// How closing tags are matched against the open elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosingPolicy {
    /// Any closing tag closes the innermost open element
    #[default]
    Permissive,
    /// Closing tags must name the innermost open element and every element must be closed
    Strict,
}

/// Errors raised by the scanner parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unterminated tag starting at byte {offset}: missing '>'")]
    UnterminatedTag { offset: usize },

    #[error("empty tag name at byte {offset}")]
    EmptyTagName { offset: usize },

    #[error("closing tag </{found}> at byte {offset} does not match open element <{expected}>")]
    MismatchedClosingTag {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("closing tag </{found}> at byte {offset} has no open element")]
    UnexpectedClosingTag { found: String, offset: usize },

    #[error("element <{tag}> opened at byte {offset} is never closed")]
    UnclosedElement { tag: String, offset: usize },
}

#[derive(Debug, Clone)]
pub struct ScannerParser {
    policy: ClosingPolicy,
    max_depth: usize,
}

impl ScannerParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ClosingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Fail with [`ParseError::TooDeep`] once more than `max_depth` elements are open
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn policy(&self) -> ClosingPolicy {
        self.policy
    }

    pub fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let bytes = source.as_bytes();
        let mut doc = Document::new();
        doc.set_root_span(0..source.len());
        let mut open: Vec<NodeId> = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] != b'<' {
                let next = memchr(b'<', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
                let text = source[pos..next].trim();
                if !text.is_empty() {
                    let id = doc.create_text(text, pos..next);
                    doc.attach_child(current(&doc, &open), id)?;
                }
                pos = next;
                continue;
            }

            let end = memchr(b'>', &bytes[pos..])
                .map(|i| pos + i)
                .ok_or(ScanError::UnterminatedTag { offset: pos })?;

            if bytes.get(pos + 1) == Some(&b'/') {
                let name = source[pos + 2..end]
                    .split_whitespace()
                    .next()
                    .unwrap_or_default();
                self.close(&doc, &mut open, name, pos)?;
            } else {
                let (tag, attributes) =
                    split_tag(&source[pos + 1..end]).ok_or(ScanError::EmptyTagName { offset: pos })?;
                if open.len() >= self.max_depth {
                    return Err(ParseError::TooDeep {
                        limit: self.max_depth,
                        offset: pos,
                    });
                }
                let id = doc.create_element(tag, attributes, pos..end + 1);
                doc.attach_child(current(&doc, &open), id)?;
                open.push(id);
            }
            pos = end + 1;
        }

        if self.policy == ClosingPolicy::Strict {
            if let Some(node) = open.last().and_then(|&id| doc.get(id)) {
                return Err(ScanError::UnclosedElement {
                    tag: node.tag().unwrap_or_default().to_string(),
                    offset: node.span().start,
                }
                .into());
            }
        }

        Ok(doc)
    }

    fn close(
        &self,
        doc: &Document,
        open: &mut Vec<NodeId>,
        name: &str,
        offset: usize,
    ) -> Result<(), ScanError> {
        match self.policy {
            ClosingPolicy::Permissive => {
                if open.pop().is_none() {
                    log::debug!("ignoring closing tag </{}> at byte {}: nothing open", name, offset);
                }
                Ok(())
            }
            ClosingPolicy::Strict => {
                let Some(&innermost) = open.last() else {
                    return Err(ScanError::UnexpectedClosingTag {
                        found: name.to_string(),
                        offset,
                    });
                };
                let expected = doc
                    .get(innermost)
                    .and_then(|node| node.tag())
                    .unwrap_or_default();
                if expected != name {
                    return Err(ScanError::MismatchedClosingTag {
                        expected: expected.to_string(),
                        found: name.to_string(),
                        offset,
                    });
                }
                open.pop();
                Ok(())
            }
        }
    }
}

impl Default for ScannerParser {
    fn default() -> Self {
        Self {
            policy: ClosingPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DocumentParser for ScannerParser {
    fn parse_source(&self, source: &str) -> Result<Document, ParseError> {
        self.parse(source)
    }
}

fn current(doc: &Document, open: &[NodeId]) -> NodeId {
    open.last().copied().unwrap_or_else(|| doc.root_id())
}

/// Split the inside of an opening tag into its name and `key=value` attributes
fn split_tag(content: &str) -> Option<(&str, Attributes)> {
    let mut parts = content.split_whitespace();
    let tag = parts.next()?;
    let attributes = parts
        .filter_map(|part| part.split_once('='))
        .map(|(key, value)| {
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            (key, AttributeValue::literal(value))
        })
        .collect();
    Some((tag, attributes))
}
