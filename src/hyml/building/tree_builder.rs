//! Tree Builder - Builds the Document from grammar parse nodes
//!
//! Walks the [`ParseNode`] tree depth-first with an explicit stack and creates one document
//! node per parse node, attaching each to its parent as soon as it exists. Children are
//! attached in the order the grammar matched them, so document order equals source order.

use std::ops::Range;

use crate::hyml::ast::diagnostics::TAG_MISMATCH;
use crate::hyml::ast::{AttributeValue, Diagnostic, Document, NodeId, SourceLocation, TreeError};
use crate::hyml::parsing::ir::{ElementBody, ParseNode, ParsedAttribute, ParsedValue};

/// Builds a [`Document`] out of the grammar's parse nodes
pub struct TreeBuilder {
    location: SourceLocation,
    source_len: usize,
    trim_text: bool,
}

impl TreeBuilder {
    /// Create a builder for nodes parsed from `source`
    pub fn new(source: &str) -> Self {
        Self {
            location: SourceLocation::new(source),
            source_len: source.len(),
            trim_text: false,
        }
    }

    /// Trim surrounding whitespace from text nodes. Off by default: grammar text is kept raw.
    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }

    pub fn build(&self, nodes: Vec<ParseNode>) -> Result<Document, TreeError> {
        let mut doc = Document::new();
        doc.set_root_span(0..self.source_len);

        // Pending nodes with the parent they attach to, next one on top
        let mut pending: Vec<(ParseNode, NodeId)> = Vec::new();
        let root = doc.root_id();
        pending.extend(nodes.into_iter().rev().map(|node| (node, root)));

        while let Some((node, parent)) = pending.pop() {
            let id = match node {
                ParseNode::Element {
                    name: (tag, _),
                    attributes,
                    body,
                    span,
                } => {
                    let attributes = attributes.into_iter().map(convert_attribute).collect();
                    let id = doc.create_element(tag.as_str(), attributes, span);

                    if let ElementBody::Matched {
                        children,
                        closing: (closing, closing_span),
                    } = body
                    {
                        if closing != tag {
                            self.report_mismatch(&mut doc, &tag, &closing, closing_span);
                        }
                        pending.extend(children.into_iter().rev().map(|child| (child, id)));
                    }
                    Some(id)
                }
                ParseNode::Code { source, span } => Some(doc.create_code(trim_code(&source), span)),
                ParseNode::Text { text, span } => self.build_text(&mut doc, text, span),
            };
            if let Some(id) = id {
                doc.attach_child(parent, id)?;
            }
        }

        log::debug!(
            "built document with {} nodes and {} diagnostics",
            doc.len(),
            doc.diagnostics().len()
        );
        Ok(doc)
    }

    fn build_text(&self, doc: &mut Document, text: String, span: Range<usize>) -> Option<NodeId> {
        if !self.trim_text {
            return Some(doc.create_text(text, span));
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(doc.create_text(trimmed, span))
        }
    }

    fn report_mismatch(
        &self,
        doc: &mut Document,
        opening: &str,
        closing: &str,
        closing_span: Range<usize>,
    ) {
        let range = self.location.byte_range_to_range(&closing_span);
        let message = format!(
            "closing tag </{}> does not match opening tag <{}>",
            closing, opening
        );
        log::warn!("{} at {}", message, range.start);
        doc.push_diagnostic(Diagnostic::warning(range, message).with_code(TAG_MISMATCH));
    }
}

fn convert_attribute(attribute: ParsedAttribute) -> (String, AttributeValue) {
    let value = match attribute.value {
        Some(ParsedValue::Str(literal)) => AttributeValue::Literal(literal),
        Some(ParsedValue::Code(source)) => AttributeValue::Expression(source),
        None => AttributeValue::Flag,
    };
    (attribute.name.0, value)
}

/// Code node content: whitespace and stray braces stripped from both ends
fn trim_code(source: &str) -> &str {
    source
        .trim()
        .trim_matches(|c| c == '{' || c == '}')
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyml::ast::DiagnosticSeverity;

    fn text(value: &str, span: Range<usize>) -> ParseNode {
        ParseNode::Text {
            text: value.to_string(),
            span,
        }
    }

    fn element(name: &str, closing: &str, children: Vec<ParseNode>) -> ParseNode {
        ParseNode::Element {
            name: (name.to_string(), 1..1 + name.len()),
            attributes: vec![],
            body: ElementBody::Matched {
                children,
                closing: (closing.to_string(), 20..20 + closing.len()),
            },
            span: 0..30,
        }
    }

    #[test]
    fn test_builds_nested_elements_in_order() {
        let nodes = vec![element(
            "div",
            "div",
            vec![text("a", 5..6), element("span", "span", vec![]), text("b", 7..8)],
        )];
        let doc = TreeBuilder::new(&" ".repeat(40)).build(nodes).unwrap();

        let div = doc.root().child(0).unwrap();
        assert_eq!(div.tag(), Some("div"));
        let shapes: Vec<&str> = div.children().map(|c| c.kind().node_type()).collect();
        assert_eq!(shapes, vec!["Text", "Element", "Text"]);
        assert!(div.children().all(|c| c.parent().map(|p| p.id()) == Some(div.id())));
        assert!(doc.diagnostics().is_empty());
    }

    #[test]
    fn test_mismatch_keeps_opening_name_and_warns() {
        let source = "<a>text</b>";
        let nodes = vec![ParseNode::Element {
            name: ("a".to_string(), 1..2),
            attributes: vec![],
            body: ElementBody::Matched {
                children: vec![text("text", 3..7)],
                closing: ("b".to_string(), 9..10),
            },
            span: 0..11,
        }];
        let doc = TreeBuilder::new(source).build(nodes).unwrap();

        assert_eq!(doc.root().child(0).unwrap().tag(), Some("a"));
        let diagnostics = doc.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].has_code(TAG_MISMATCH));
        assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
        assert_eq!(diagnostics[0].range.span, 9..10);
    }

    #[test]
    fn test_builds_nesting_deeper_than_the_call_stack() {
        let depth = 20_000;
        let mut node = text("x", 0..1);
        for _ in 0..depth {
            node = element("a", "a", vec![node]);
        }
        let doc = TreeBuilder::new(&" ".repeat(40)).build(vec![node]).unwrap();

        assert_eq!(doc.len(), depth + 2);
        let deepest = doc.root().descendants().into_iter().last().unwrap();
        assert_eq!(deepest.value(), Some("x"));
    }

    #[test]
    fn test_self_closing_has_no_children() {
        let nodes = vec![ParseNode::Element {
            name: ("br".to_string(), 1..3),
            attributes: vec![],
            body: ElementBody::SelfClosing,
            span: 0..5,
        }];
        let doc = TreeBuilder::new("<br/>").build(nodes).unwrap();
        assert_eq!(doc.root().child(0).unwrap().child_count(), 0);
    }

    #[test]
    fn test_attribute_provenance() {
        let nodes = vec![ParseNode::Element {
            name: ("input".to_string(), 1..6),
            attributes: vec![
                ParsedAttribute {
                    name: ("type".to_string(), 7..11),
                    value: Some(ParsedValue::Str("text".to_string())),
                },
                ParsedAttribute {
                    name: ("value".to_string(), 19..24),
                    value: Some(ParsedValue::Code(" name ".to_string())),
                },
                ParsedAttribute {
                    name: ("disabled".to_string(), 33..41),
                    value: None,
                },
            ],
            body: ElementBody::SelfClosing,
            span: 0..43,
        }];
        let doc = TreeBuilder::new(&" ".repeat(43)).build(nodes).unwrap();
        let attributes = doc.root().child(0).unwrap().attributes();

        assert_eq!(
            attributes.get("type"),
            Some(&AttributeValue::literal("text"))
        );
        assert_eq!(
            attributes.get("value"),
            Some(&AttributeValue::expression(" name "))
        );
        assert_eq!(attributes.get("disabled"), Some(&AttributeValue::Flag));
        let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["type", "value", "disabled"]);
    }

    #[test]
    fn test_code_is_trimmed() {
        assert_eq!(trim_code("  x + 1  "), "x + 1");
        assert_eq!(trim_code(" {x} "), "x");
        assert_eq!(trim_code("{ {a"), "a");
        assert_eq!(trim_code("   "), "");
    }

    #[test]
    fn test_text_trimming_is_optional() {
        let raw = TreeBuilder::new("  hi  ")
            .build(vec![text("  hi  ", 0..6)])
            .unwrap();
        assert_eq!(raw.root().child(0).unwrap().value(), Some("  hi  "));

        let trimmed = TreeBuilder::new("  hi  ")
            .trim_text(true)
            .build(vec![text("  hi  ", 0..6)])
            .unwrap();
        assert_eq!(trimmed.root().child(0).unwrap().value(), Some("hi"));
    }
}
