//! Render format: an indented, tag-wrapped view of the tree
//!
//! One construct per line. Elements print an opening line, their children one level deeper,
//! then a closing line. Code nodes print as `{ value }` and text nodes print their trimmed
//! value. The root itself prints nothing.
//!
//!     <div id="x">
//!       Hello
//!       { name }
//!     </div>
//!
//! This is a debug view, not a serializer: whitespace and self-closing syntax are lost, so
//! rendering and re-parsing does not in general give back the same document.

use super::registry::{FormatError, Formatter};
use crate::hyml::ast::{Document, NodeKind, NodeRef};

pub struct RenderFormatter {
    indent: String,
}

impl RenderFormatter {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    pub fn render(&self, doc: &Document) -> String {
        let mut output = String::new();
        let mut steps: Vec<Step<'_>> = doc
            .root()
            .children()
            .map(|child| Step::Open(child, 0))
            .collect();
        steps.reverse();

        while let Some(step) = steps.pop() {
            match step {
                Step::Open(node, level) => self.open_node(&mut output, &mut steps, node, level),
                Step::Close(tag, level) => {
                    output.push_str(&format!("{}</{}>\n", self.indent.repeat(level), tag));
                }
            }
        }
        output
    }

    fn open_node<'a>(
        &self,
        output: &mut String,
        steps: &mut Vec<Step<'a>>,
        node: NodeRef<'a>,
        level: usize,
    ) {
        let indent = self.indent.repeat(level);
        match node.kind() {
            NodeKind::Root => push_children(steps, node, level),
            NodeKind::Element { tag } => {
                output.push_str(&indent);
                output.push('<');
                output.push_str(tag);
                for (name, value) in node.attributes().iter() {
                    output.push(' ');
                    output.push_str(name);
                    if !value.is_flag() {
                        output.push('=');
                        output.push_str(&value.to_string());
                    }
                }
                output.push_str(">\n");
                steps.push(Step::Close(tag, level));
                push_children(steps, node, level + 1);
            }
            NodeKind::Code { source } => {
                output.push_str(&format!("{}{{ {} }}\n", indent, source));
            }
            NodeKind::Text { value } => {
                output.push_str(&format!("{}{}\n", indent, value.trim()));
            }
        }
    }
}

/// Pending render work, popped from the top
enum Step<'a> {
    Open(NodeRef<'a>, usize),
    Close(&'a str, usize),
}

fn push_children<'a>(steps: &mut Vec<Step<'a>>, node: NodeRef<'a>, level: usize) {
    let first = steps.len();
    steps.extend(node.children().map(|child| Step::Open(child, level)));
    steps[first..].reverse();
}

impl Default for RenderFormatter {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl Formatter for RenderFormatter {
    fn name(&self) -> &str {
        "render"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.render(doc))
    }

    fn description(&self) -> &str {
        "Indented tag-wrapped debug view"
    }
}

/// Render with the default two-space indent
pub fn render(doc: &Document) -> String {
    RenderFormatter::default().render(doc)
}
