//! Fluent assertion API for document trees

use crate::hyml::ast::{AttributeValue, Document, NodeKind, NodeRef};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_tree(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn child_count(self, expected: usize) -> Self {
        let root = self.doc.root();
        assert_child_count(root, expected, "root");
        self
    }

    /// Assert on a top-level node by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let root = self.doc.root();
        let child = child_at(root, index, "root");
        assertion(NodeAssertion {
            node: child,
            context: format!("root[{}]", index),
        });
        self
    }

    /// Assert the number of recorded diagnostics
    pub fn diagnostic_count(self, expected: usize) -> Self {
        let actual = self.doc.diagnostics().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} diagnostics, found {}: [{}]",
            expected,
            actual,
            self.doc
                .diagnostics()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        );
        self
    }

    /// Assert some diagnostic carries `code`
    pub fn has_diagnostic(self, code: &str) -> Self {
        assert!(
            self.doc.diagnostics().iter().any(|d| d.has_code(code)),
            "Expected a diagnostic with code '{}', found {:?}",
            code,
            self.doc
                .diagnostics()
                .iter()
                .map(|d| d.code.as_deref())
                .collect::<Vec<_>>()
        );
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: NodeRef<'a>,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is an element named `tag`
    pub fn assert_element(self, tag: &str) -> ElementAssertion<'a> {
        match self.node.kind() {
            NodeKind::Element { tag: actual } => {
                assert_eq!(
                    actual, tag,
                    "{}: Expected element <{}>, found <{}>",
                    self.context, tag, actual
                );
                ElementAssertion {
                    node: self.node,
                    context: self.context,
                }
            }
            other => panic!(
                "{}: Expected Element <{}>, found {}",
                self.context,
                tag,
                other.node_type()
            ),
        }
    }

    /// Assert this node is a text node
    pub fn assert_text(self) -> TextAssertion<'a> {
        match self.node.kind() {
            NodeKind::Text { value } => TextAssertion {
                value,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Text, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    /// Assert this node is a code node
    pub fn assert_code(self) -> CodeAssertion<'a> {
        match self.node.kind() {
            NodeKind::Code { source } => CodeAssertion {
                source,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Code, found {}",
                self.context,
                other.node_type()
            ),
        }
    }
}

// ============================================================================
// Element Assertions
// ============================================================================

pub struct ElementAssertion<'a> {
    node: NodeRef<'a>,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    /// Assert an attribute's string value, whatever its provenance
    pub fn attribute(self, name: &str, expected: &str) -> Self {
        let actual = self.node.attributes().get(name);
        assert_eq!(
            actual.and_then(AttributeValue::as_str),
            Some(expected),
            "{}: Expected attribute {}=\"{}\", found {:?}",
            self.context,
            name,
            expected,
            actual
        );
        self
    }

    /// Assert an attribute's value including its provenance
    pub fn attribute_value(self, name: &str, expected: AttributeValue) -> Self {
        let actual = self.node.attributes().get(name);
        assert_eq!(
            actual,
            Some(&expected),
            "{}: Expected attribute {} to be {:?}, found {:?}",
            self.context,
            name,
            expected,
            actual
        );
        self
    }

    pub fn no_attribute(self, name: &str) -> Self {
        assert!(
            !self.node.attributes().contains(name),
            "{}: Expected no attribute '{}', found {:?}",
            self.context,
            name,
            self.node.attributes().get(name)
        );
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        let actual = self.node.attributes().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} attributes, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.node
                .attributes()
                .iter()
                .map(|(name, _)| name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(self.node, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = child_at(self.node, index, &self.context);
        assertion(NodeAssertion {
            node: child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Text and Code Assertions
// ============================================================================

pub struct TextAssertion<'a> {
    value: &'a str,
    context: String,
}

impl<'a> TextAssertion<'a> {
    /// Compare ignoring surrounding whitespace
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.value.trim(),
            expected,
            "{}: Expected text '{}', found '{}'",
            self.context,
            expected,
            self.value
        );
        self
    }

    /// Compare exactly, whitespace included
    pub fn raw(self, expected: &str) -> Self {
        assert_eq!(
            self.value, expected,
            "{}: Expected raw text {:?}, found {:?}",
            self.context, expected, self.value
        );
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        assert!(
            self.value.contains(substring),
            "{}: Expected text to contain '{}', found '{}'",
            self.context,
            substring,
            self.value
        );
        self
    }
}

pub struct CodeAssertion<'a> {
    source: &'a str,
    context: String,
}

impl<'a> CodeAssertion<'a> {
    pub fn source(self, expected: &str) -> Self {
        assert_eq!(
            self.source, expected,
            "{}: Expected code '{}', found '{}'",
            self.context, expected, self.source
        );
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn assert_child_count(node: NodeRef<'_>, expected: usize, context: &str) {
    let actual = node.child_count();
    assert_eq!(
        actual,
        expected,
        "{}: Expected {} children, found {} children: [{}]",
        context,
        expected,
        actual,
        summarize_children(node)
    );
}

fn child_at<'a>(node: NodeRef<'a>, index: usize, context: &str) -> NodeRef<'a> {
    match node.child(index) {
        Some(child) => child,
        None => panic!(
            "{}: Child index {} out of bounds (node has {} children)",
            context,
            index,
            node.child_count()
        ),
    }
}

fn summarize_children(node: NodeRef<'_>) -> String {
    node.children()
        .map(|child| match child.kind() {
            NodeKind::Element { tag } => format!("<{}>", tag),
            other => other.node_type().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
