//! Analysis configuration.

use hobart_data::{Fact, FactDocument, flatten, flatten_recursive};
use hobart_ratios::MatcherKind;
use serde::{Deserialize, Serialize};

/// Which nodes of the fact tree become facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Walk {
    /// Only the immediate children of `xbrl_content`
    #[default]
    Children,

    /// Every descendant, depth-first in document order
    Nested,
}

impl Walk {
    /// Flattens a document according to this walk.
    pub fn flatten(&self, doc: &FactDocument) -> Vec<Fact> {
        match self {
            Self::Children => flatten(doc),
            Self::Nested => flatten_recursive(doc),
        }
    }
}

/// Configuration for an analysis run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Concept matching strategy (default: substring)
    pub matcher: MatcherKind,
    /// Fact tree walk (default: immediate children)
    pub walk: Walk,
}

impl AnalysisConfig {
    /// Sets the concept matching strategy.
    pub const fn with_matcher(mut self, matcher: MatcherKind) -> Self {
        self.matcher = matcher;
        self
    }

    /// Sets the fact tree walk.
    pub const fn with_walk(mut self, walk: Walk) -> Self {
        self.walk = walk;
        self
    }
}
