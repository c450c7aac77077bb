//! Element attributes
//!
//! Attribute names map to an [`AttributeValue`] which keeps the provenance of the value. A
//! quoted string and a `{...}` expression may carry identical text, but a renderer that
//! evaluates code needs to tell them apart. [`AttributeValue::as_str`] gives the flattened
//! string view for callers that don't care.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The value side of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// Text from a quoted string (quotes stripped) or a bare `key=value` pair
    Literal(String),
    /// Raw inner text of a `{...}` block
    Expression(String),
    /// Attribute present without a value, e.g. `<input disabled/>`
    Flag,
}

impl AttributeValue {
    pub fn literal(value: impl Into<String>) -> Self {
        AttributeValue::Literal(value.into())
    }

    pub fn expression(source: impl Into<String>) -> Self {
        AttributeValue::Expression(source.into())
    }

    /// The value text with provenance dropped; `None` for flags
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Literal(value) | AttributeValue::Expression(value) => Some(value),
            AttributeValue::Flag => None,
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, AttributeValue::Expression(_))
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, AttributeValue::Flag)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Literal(value) => write!(f, "\"{}\"", value),
            AttributeValue::Expression(source) => write!(f, "{{{}}}", source),
            AttributeValue::Flag => Ok(()),
        }
    }
}

/// Ordered attribute map. Re-inserting a name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute; the last occurrence of a name wins
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Flattened string value of an attribute (see [`AttributeValue::as_str`])
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, AttributeValue)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, AttributeValue)>>(iter: T) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
