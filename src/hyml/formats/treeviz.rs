//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors, so a whole document can be scanned
//! at a glance:
//!
//! ```text
//! ⧉ Document
//! ├─ ◇ div id="x"
//! │ ├─ ◦ Hello
//! │ └─ ƒ name
//! └─ ◇ br
//! ```
//!
//! Format: `<prefix><connector> <icon> <label>`, the label truncated to a maximum number of
//! characters (30 by default) followed by `...`.
//!
//! Icons
//!     Root: ⧉
//!     Element: ◇
//!     Text: ◦
//!     Code: ƒ

use super::registry::{FormatError, Formatter};
use crate::hyml::ast::{snapshot_from_document, Document, NodeSnapshot};

fn icon(node_type: &str) -> &'static str {
    match node_type {
        "Root" => "⧉",
        "Element" => "◇",
        "Text" => "◦",
        "Code" => "ƒ",
        _ => "?",
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub struct TreevizFormatter {
    max_label: usize,
}

impl TreevizFormatter {
    pub fn new(max_label: usize) -> Self {
        Self { max_label }
    }

    pub fn format(&self, doc: &Document) -> String {
        let snapshot = snapshot_from_document(doc);
        let mut result = format!("{} Document\n", icon(&snapshot.node_type));
        self.append_children(&mut result, &snapshot.children, "");
        result
    }

    fn append_node(&self, result: &mut String, node: &NodeSnapshot, prefix: &str, is_last: bool) {
        let connector = if is_last { "└─" } else { "├─" };
        let label = truncate(&node.label(), self.max_label);

        result.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            icon(&node.node_type),
            label
        ));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        self.append_children(result, &node.children, &new_prefix);
    }

    fn append_children(&self, result: &mut String, children: &[NodeSnapshot], prefix: &str) {
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            self.append_node(result, child, prefix, is_last);
        }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.format(doc))
    }

    fn description(&self) -> &str {
        "One line per node tree view"
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    TreevizFormatter::default().format(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyml::ast::{AttributeValue, Attributes};

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééé", 2), "éé...");
    }

    #[test]
    fn test_treeviz_connectors() {
        let mut doc = Document::new();
        let mut attributes = Attributes::new();
        attributes.insert("id", AttributeValue::literal("x"));
        let div = doc.create_element("div", attributes, 0..0);
        let text = doc.create_text("Hello", 0..0);
        let code = doc.create_code("name", 0..0);
        let br = doc.create_element("br", Attributes::new(), 0..0);
        doc.attach_child(doc.root_id(), div).unwrap();
        doc.attach_child(div, text).unwrap();
        doc.attach_child(div, code).unwrap();
        doc.attach_child(doc.root_id(), br).unwrap();

        assert_eq!(
            to_treeviz_str(&doc),
            "⧉ Document\n├─ ◇ div id=\"x\"\n│ ├─ ◦ Hello\n│ └─ ƒ name\n└─ ◇ br\n"
        );
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let mut doc = Document::new();
        let text = doc.create_text("a".repeat(40), 0..0);
        doc.attach_child(doc.root_id(), text).unwrap();

        let output = TreevizFormatter::new(5).format(&doc);
        assert_eq!(output, "⧉ Document\n└─ ◦ aaaaa...\n");
    }
}
