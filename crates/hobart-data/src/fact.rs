//! Flat fact records.

use crate::document::RawNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute carrying the reporting context.
pub const CONTEXT_REF: &str = "contextRef";

/// Attribute carrying the unit of measure.
pub const UNIT_REF: &str = "unitRef";

/// Attribute carrying the reported precision.
pub const DECIMALS: &str = "decimals";

/// A single tagged data point taken from the fact tree.
///
/// Context and unit references are carried through but never interpreted.
/// Missing values and attributes are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    /// The concept tag (e.g., "us-gaap:NetIncomeLoss")
    pub concept: String,

    /// Raw textual value as reported
    #[serde(rename = "value", default)]
    pub value_text: String,

    /// Reporting context reference
    #[serde(rename = "contextRef", default)]
    pub context_ref: String,

    /// Unit of measure reference
    #[serde(rename = "unitRef", default)]
    pub unit_ref: String,

    /// Reported precision
    #[serde(default)]
    pub decimals: String,
}

impl Fact {
    /// Creates a fact with a concept and raw value and no attributes.
    pub fn new(concept: impl Into<String>, value_text: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            value_text: value_text.into(),
            ..Self::default()
        }
    }

    /// Sets the context reference.
    pub fn with_context(mut self, context_ref: impl Into<String>) -> Self {
        self.context_ref = context_ref.into();
        self
    }

    /// Sets the unit reference.
    pub fn with_unit(mut self, unit_ref: impl Into<String>) -> Self {
        self.unit_ref = unit_ref.into();
        self
    }

    /// Sets the reported precision.
    pub fn with_decimals(mut self, decimals: impl Into<String>) -> Self {
        self.decimals = decimals.into();
        self
    }

    /// Builds a fact from a tree node.
    ///
    /// Returns `None` unless the node has both a tag and an attribute mapping.
    /// An empty attribute mapping is enough.
    pub fn from_node(node: &RawNode) -> Option<Self> {
        let concept = node.tag.as_ref()?;
        let attributes = node.attributes.as_ref()?;
        let attr = |key: &str| attributes.get(key).cloned().unwrap_or_default();

        Some(Self {
            concept: concept.clone(),
            value_text: node.text.clone().unwrap_or_default(),
            context_ref: attr(CONTEXT_REF),
            unit_ref: attr(UNIT_REF),
            decimals: attr(DECIMALS),
        })
    }

    /// Concept name without its taxonomy prefix ("us-gaap:Assets" -> "Assets").
    pub fn local_name(&self) -> &str {
        local_name(&self.concept)
    }
}

/// Strips the taxonomy prefix from a concept tag; unprefixed tags are
/// returned as-is.
pub fn local_name(concept: &str) -> &str {
    concept.rsplit_once(':').map_or(concept, |(_, name)| name)
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.concept, self.value_text)?;
        if !self.unit_ref.is_empty() {
            write!(f, " {}", self.unit_ref)?;
        }
        if !self.context_ref.is_empty() {
            write!(f, " [{}]", self.context_ref)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_node_defaults() {
        let node = RawNode {
            tag: Some("us-gaap:Assets".to_string()),
            text: None,
            attributes: Some(Default::default()),
            children: Vec::new(),
        };

        let fact = Fact::from_node(&node).unwrap();
        assert_eq!(fact.concept, "us-gaap:Assets");
        assert_eq!(fact.value_text, "");
        assert_eq!(fact.context_ref, "");
        assert_eq!(fact.unit_ref, "");
        assert_eq!(fact.decimals, "");
    }

    #[test]
    fn test_from_node_requires_tag_and_attributes() {
        let untagged = RawNode {
            attributes: Some(Default::default()),
            ..RawNode::default()
        };
        assert!(Fact::from_node(&untagged).is_none());

        let no_attrs = RawNode {
            tag: Some("Assets".to_string()),
            text: Some("1".to_string()),
            ..RawNode::default()
        };
        assert!(Fact::from_node(&no_attrs).is_none());
    }

    #[test]
    fn test_from_node_attributes() {
        let node = RawNode::fact("us-gaap:Revenues", "500")
            .with_attribute("contextRef", "FY2023")
            .with_attribute("unitRef", "USD")
            .with_attribute("decimals", "-6");

        let fact = Fact::from_node(&node).unwrap();
        assert_eq!(fact.context_ref, "FY2023");
        assert_eq!(fact.unit_ref, "USD");
        assert_eq!(fact.decimals, "-6");
    }

    #[test]
    fn test_local_name() {
        assert_eq!(Fact::new("us-gaap:Assets", "").local_name(), "Assets");
        assert_eq!(Fact::new("Assets", "").local_name(), "Assets");
        assert_eq!(local_name("ifrs-full:Equity"), "Equity");
    }

    #[test]
    fn test_serde_wire_names() {
        let fact = Fact::new("Assets", "100")
            .with_context("c1")
            .with_unit("USD");
        let json = serde_json::to_value(&fact).unwrap();

        assert_eq!(json["value"], "100");
        assert_eq!(json["contextRef"], "c1");
        assert_eq!(json["unitRef"], "USD");
        assert_eq!(json["decimals"], "");
    }

    #[test]
    fn test_display() {
        let fact = Fact::new("Assets", "100").with_unit("USD").with_context("c1");
        assert_eq!(fact.to_string(), "Assets = 100 USD [c1]");
    }
}
