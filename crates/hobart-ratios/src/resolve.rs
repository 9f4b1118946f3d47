//! Concept resolution.
//!
//! Resolution finds the first fact, in document order, whose concept satisfies
//! the matcher, and coerces its text to a number. It never fails: a missing
//! concept or an unparseable value both resolve to `0.0`. [`Resolved`] keeps
//! the two cases apart for callers that care.

use crate::matcher::{ConceptMatcher, MatcherKind, SubstringMatcher};
use hobart_data::Fact;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one concept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolved {
    /// A fact matched and its value parsed
    Found(f64),

    /// A fact matched but its value is not a finite number
    Unparseable,

    /// No fact matched
    Missing,
}

impl Resolved {
    /// Numeric value under the degrade-to-zero policy.
    pub const fn value(&self) -> f64 {
        match self {
            Self::Found(v) => *v,
            Self::Unparseable | Self::Missing => 0.0,
        }
    }

    /// Returns true if no fact matched.
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true if a fact matched and parsed.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Parses a reported value, ignoring thousands separators and surrounding
/// whitespace. Non-finite results are rejected.
pub fn parse_value(text: &str) -> Option<f64> {
    text.replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Resolves concept names against a borrowed fact list.
#[derive(Debug)]
pub struct ConceptResolver<'a> {
    facts: &'a [Fact],
    matcher: Box<dyn ConceptMatcher>,
}

impl<'a> ConceptResolver<'a> {
    /// Creates a resolver using case-insensitive substring matching.
    pub fn new(facts: &'a [Fact]) -> Self {
        Self::with_matcher(facts, SubstringMatcher)
    }

    /// Creates a resolver with a specific matching strategy.
    pub fn with_matcher(facts: &'a [Fact], matcher: impl ConceptMatcher + 'static) -> Self {
        Self {
            facts,
            matcher: Box::new(matcher),
        }
    }

    /// Creates a resolver from a configured matcher kind.
    pub fn with_kind(facts: &'a [Fact], kind: MatcherKind) -> Self {
        Self {
            facts,
            matcher: kind.matcher(),
        }
    }

    /// The facts being searched.
    pub const fn facts(&self) -> &'a [Fact] {
        self.facts
    }

    /// The active matching strategy.
    pub fn matcher(&self) -> &dyn ConceptMatcher {
        self.matcher.as_ref()
    }

    /// First fact in document order matching the concept.
    pub fn find(&self, concept: &str) -> Option<&'a Fact> {
        self.facts
            .iter()
            .find(|f| self.matcher.matches(&f.concept, concept))
    }

    /// Resolves a concept, distinguishing missing from unparseable values.
    pub fn resolve_detailed(&self, concept: &str) -> Resolved {
        let Some(fact) = self.find(concept) else {
            log::debug!(
                "No fact matches concept {concept} ({} matcher)",
                self.matcher.name()
            );
            return Resolved::Missing;
        };

        match parse_value(&fact.value_text) {
            Some(v) => Resolved::Found(v),
            None => {
                log::warn!(
                    "Fact {} for concept {concept} has non-numeric value {:?}",
                    fact.concept,
                    fact.value_text
                );
                Resolved::Unparseable
            }
        }
    }

    /// Resolves a concept to a number, `0.0` when missing or unparseable.
    pub fn resolve(&self, concept: &str) -> f64 {
        self.resolve_detailed(concept).value()
    }
}

/// Resolves a concept with the default substring matcher.
pub fn resolve(facts: &[Fact], concept: &str) -> f64 {
    ConceptResolver::new(facts).resolve(concept)
}
