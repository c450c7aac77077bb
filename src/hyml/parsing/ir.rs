//! Intermediate Representation for the grammar parser
//!
//! The grammar produces a tree of [`ParseNode`]s that records what was matched and where,
//! without deciding anything about the document model. Turning IR into nodes (tag mismatch
//! handling, code trimming, attribute provenance) is the job of
//! [building](crate::hyml::building).

use std::ops::Range;

/// A value paired with the byte range it was read from
pub type Spanned<T> = (T, Range<usize>);

/// Right-hand side of `name=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    /// Quoted string, quotes removed
    Str(String),
    /// `{...}` block, braces removed
    Code(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAttribute {
    pub name: Spanned<String>,
    pub value: Option<ParsedValue>,
}

/// How an element was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementBody {
    /// `<name ...> children </closing>`; `closing` may differ from the opening name
    Matched {
        children: Vec<ParseNode>,
        closing: Spanned<String>,
    },
    /// `<name .../>`
    SelfClosing,
}

/// A node in the parse tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    Element {
        name: Spanned<String>,
        attributes: Vec<ParsedAttribute>,
        body: ElementBody,
        span: Range<usize>,
    },
    Code {
        source: String,
        span: Range<usize>,
    },
    Text {
        text: String,
        span: Range<usize>,
    },
}

impl ParseNode {
    pub fn node_type(&self) -> &'static str {
        match self {
            ParseNode::Element { .. } => "Element",
            ParseNode::Code { .. } => "Code",
            ParseNode::Text { .. } => "Text",
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            ParseNode::Element { span, .. }
            | ParseNode::Code { span, .. }
            | ParseNode::Text { span, .. } => span.clone(),
        }
    }
}
