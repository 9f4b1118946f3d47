//! Concept matching strategies.
//!
//! The engines never compare tags themselves; they ask a [`ConceptMatcher`]
//! whether a fact's concept satisfies a requested name. Swapping the matcher
//! changes lookup semantics without touching any formula.

use hobart_data::local_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decides whether a fact's concept tag satisfies a requested concept name.
pub trait ConceptMatcher: fmt::Debug + Send + Sync {
    /// Short identifier of the strategy.
    fn name(&self) -> &str;

    /// Returns true if `fact_concept` (a tag such as "us-gaap:AssetsCurrent")
    /// satisfies `requested` (a name such as "Assets").
    fn matches(&self, fact_concept: &str, requested: &str) -> bool;
}

/// Case-insensitive substring matching.
///
/// Tolerates taxonomy prefixes and suffixed variants: "Assets" matches both
/// "us-gaap:Assets" and "us-gaap:AssetsCurrent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringMatcher;

impl ConceptMatcher for SubstringMatcher {
    fn name(&self) -> &str {
        "substring"
    }

    fn matches(&self, fact_concept: &str, requested: &str) -> bool {
        fact_concept
            .to_lowercase()
            .contains(&requested.to_lowercase())
    }
}

/// Case-insensitive equality on the full tag, prefix included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatcher;

impl ConceptMatcher for ExactMatcher {
    fn name(&self) -> &str {
        "exact"
    }

    fn matches(&self, fact_concept: &str, requested: &str) -> bool {
        fact_concept.eq_ignore_ascii_case(requested)
    }
}

/// Case-insensitive equality after stripping taxonomy prefixes from both
/// sides, so "Assets" and "us-gaap:Assets" match but "us-gaap:AssetsCurrent"
/// does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixedMatcher;

impl ConceptMatcher for PrefixedMatcher {
    fn name(&self) -> &str {
        "prefixed"
    }

    fn matches(&self, fact_concept: &str, requested: &str) -> bool {
        local_name(fact_concept).eq_ignore_ascii_case(local_name(requested))
    }
}

/// Selectable matching strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// [`SubstringMatcher`]
    #[default]
    Substring,

    /// [`ExactMatcher`]
    Exact,

    /// [`PrefixedMatcher`]
    Prefixed,
}

impl MatcherKind {
    /// Returns all matcher kinds.
    pub const fn all() -> [Self; 3] {
        [Self::Substring, Self::Exact, Self::Prefixed]
    }

    /// Returns the identifier used on the command line and in configs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Exact => "exact",
            Self::Prefixed => "prefixed",
        }
    }

    /// Instantiates the strategy.
    pub fn matcher(&self) -> Box<dyn ConceptMatcher> {
        match self {
            Self::Substring => Box::new(SubstringMatcher),
            Self::Exact => Box::new(ExactMatcher),
            Self::Prefixed => Box::new(PrefixedMatcher),
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatcherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown matcher: {s} (expected substring, exact or prefixed)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("us-gaap:Assets", "Assets", true)]
    #[case("us-gaap:AssetsCurrent", "Assets", true)]
    #[case("us-gaap:AssetsCurrent", "assets", true)]
    #[case("us-gaap:AssetsCurrent", "CurrentAssets", false)]
    #[case("us-gaap:Revenues", "Revenue", true)]
    fn test_substring(#[case] concept: &str, #[case] requested: &str, #[case] expected: bool) {
        assert_eq!(SubstringMatcher.matches(concept, requested), expected);
    }

    #[rstest]
    #[case("Assets", "assets", true)]
    #[case("us-gaap:Assets", "Assets", false)]
    #[case("us-gaap:Assets", "us-gaap:assets", true)]
    #[case("AssetsCurrent", "Assets", false)]
    fn test_exact(#[case] concept: &str, #[case] requested: &str, #[case] expected: bool) {
        assert_eq!(ExactMatcher.matches(concept, requested), expected);
    }

    #[rstest]
    #[case("us-gaap:Assets", "Assets", true)]
    #[case("ifrs-full:Equity", "equity", true)]
    #[case("us-gaap:AssetsCurrent", "Assets", false)]
    #[case("Assets", "us-gaap:Assets", true)]
    fn test_prefixed(#[case] concept: &str, #[case] requested: &str, #[case] expected: bool) {
        assert_eq!(PrefixedMatcher.matches(concept, requested), expected);
    }

    #[test]
    fn test_kind_round_trip_names() {
        for kind in MatcherKind::all() {
            assert_eq!(kind.as_str().parse::<MatcherKind>().unwrap(), kind);
            assert_eq!(kind.matcher().name(), kind.as_str());
        }
        assert_eq!(MatcherKind::default(), MatcherKind::Substring);
        assert!("fuzzy".parse::<MatcherKind>().is_err());
    }
}
