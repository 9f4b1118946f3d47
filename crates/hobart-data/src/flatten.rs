//! Flattening of the fact tree into an ordered fact list.
//!
//! [`flatten`] looks only at the immediate children of `xbrl_content`.
//! [`flatten_recursive`] walks every descendant in pre-order for documents
//! that nest facts inside grouping nodes. Both apply the same inclusion rule
//! (see [`Fact::from_node`]) and never fail.

use crate::document::{FactDocument, RawNode};
use crate::fact::Fact;

/// Flattens the top-level children of a document, in document order.
pub fn flatten(doc: &FactDocument) -> Vec<Fact> {
    flatten_nodes(doc.children())
}

/// Flattens a slice of sibling nodes without descending into their children.
pub fn flatten_nodes(nodes: &[RawNode]) -> Vec<Fact> {
    nodes.iter().filter_map(fact_or_skip).collect()
}

/// Flattens every node below `xbrl_content`, depth-first in document order.
///
/// A parent is emitted before its children, and each node is visited exactly
/// once. The root itself is not considered.
pub fn flatten_recursive(doc: &FactDocument) -> Vec<Fact> {
    let mut facts = Vec::new();
    let mut stack: Vec<&RawNode> = doc.children().iter().rev().collect();

    while let Some(node) = stack.pop() {
        if let Some(fact) = fact_or_skip(node) {
            facts.push(fact);
        }
        stack.extend(node.children.iter().rev());
    }

    facts
}

fn fact_or_skip(node: &RawNode) -> Option<Fact> {
    let fact = Fact::from_node(node);
    if fact.is_none() {
        log::trace!(
            "Skipping node without tag or attributes (tag: {:?})",
            node.tag
        );
    }
    fact
}
