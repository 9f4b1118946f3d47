//! Integration tests for the ratio and regional metric engines

use approx::assert_relative_eq;
use hobart_data::Fact;
use hobart_ratios::{
    ConceptResolver, MatcherKind, Ratio, RegionalMetric, compute_ratios, compute_ratios_with,
    compute_regional_metrics, compute_regional_metrics_with, resolve,
};
use rstest::rstest;

/// Facts ordered so that every substring lookup hits the intended concept first.
fn reference_facts() -> Vec<Fact> {
    [
        ("Assets", "1000"),
        ("Liabilities", "600"),
        ("CurrentAssets", "400"),
        ("CurrentLiabilities", "200"),
        ("Equity", "400"),
        ("ProfitLoss", "50"),
        ("Revenue", "500"),
        ("PriorYearRevenue", "400"),
    ]
    .into_iter()
    .map(|(concept, value)| Fact::new(concept, value).with_context("FY2023").with_unit("USD"))
    .collect()
}

#[test]
fn test_reference_ratios() {
    let ratios = compute_ratios(&reference_facts());

    assert_relative_eq!(ratios.get("CurrentRatio").unwrap(), 2.0);
    assert_relative_eq!(ratios.get("DebtToEquityRatio").unwrap(), 1.5);
    assert_relative_eq!(ratios.get("ReturnOnAssets").unwrap(), 0.05);
    assert_relative_eq!(ratios.get("ReturnOnEquity").unwrap(), 0.125);
    assert_relative_eq!(ratios.get("ProfitMargin").unwrap(), 0.1);
}

#[test]
fn test_reference_regional_metrics() {
    let metrics = compute_regional_metrics(&reference_facts());

    assert_relative_eq!(metrics.get("AssetTurnover").unwrap(), 0.5);
    assert_relative_eq!(metrics.get("WorkingCapital").unwrap(), 200.0);
    assert_relative_eq!(metrics.get("EquityRatio").unwrap(), 0.4);
    assert_relative_eq!(metrics.get("RevenueGrowth").unwrap(), 0.25);
}

/// Current* facts listed before their totals, the order filings usually use.
fn current_first_facts() -> Vec<Fact> {
    [
        ("Assets", "1000"),
        ("CurrentAssets", "400"),
        ("CurrentLiabilities", "200"),
        ("Liabilities", "600"),
        ("Equity", "400"),
        ("ProfitLoss", "50"),
        ("Revenue", "500"),
        ("PriorYearRevenue", "400"),
    ]
    .into_iter()
    .map(|(concept, value)| Fact::new(concept, value).with_context("FY2023").with_unit("USD"))
    .collect()
}

#[test]
fn test_substring_lookup_depends_on_fact_order() {
    let facts = current_first_facts();
    assert_eq!(resolve(&facts, "Assets"), 1000.0);
    assert_eq!(resolve(&facts, "Liabilities"), 200.0);

    let ratios = compute_ratios(&facts);
    assert_relative_eq!(ratios.get("CurrentRatio").unwrap(), 2.0);
    assert_relative_eq!(ratios.get("DebtToEquityRatio").unwrap(), 0.5);

    let resolver = ConceptResolver::with_kind(&facts, MatcherKind::Prefixed);
    let prefixed = compute_ratios_with(&resolver);
    assert_relative_eq!(prefixed.get("DebtToEquityRatio").unwrap(), 1.5);
    assert_relative_eq!(prefixed.get("CurrentRatio").unwrap(), 2.0);
}

#[test]
fn test_first_match_policy() {
    let facts = vec![Fact::new("Assets", "100"), Fact::new("AssetsCurrent", "40")];
    assert_eq!(resolve(&facts, "Assets"), 100.0);
}

#[rstest]
#[case("1,234.5", 1234.5)]
#[case("N/A", 0.0)]
#[case("", 0.0)]
fn test_numeric_coercion(#[case] text: &str, #[case] expected: f64) {
    let facts = vec![Fact::new("us-gaap:Revenues", text)];
    assert_eq!(resolve(&facts, "Revenue"), expected);
}

#[rstest]
#[case("Assets")]
#[case("PriorYearRevenue")]
#[case("SomethingThatDoesNotExist")]
fn test_missing_concepts_resolve_to_zero(#[case] concept: &str) {
    let facts = vec![Fact::new("dei:EntityRegistrantName", "Apple Inc.")];
    assert_eq!(resolve(&facts, concept), 0.0);
}

#[rstest]
#[case("CurrentLiabilities", "CurrentRatio")]
#[case("Equity", "DebtToEquityRatio")]
#[case("Equity", "ReturnOnEquity")]
#[case("Revenue", "ProfitMargin")]
fn test_zero_denominator_ratios(#[case] zeroed: &str, #[case] label: &str) {
    let facts: Vec<Fact> = reference_facts()
        .into_iter()
        .map(|f| {
            if f.concept == zeroed {
                Fact::new(f.concept, "0")
            } else {
                f
            }
        })
        .collect();

    let value = compute_ratios(&facts).get(label).unwrap();
    assert_eq!(value, 0.0);
    assert!(value.is_finite());
}

#[test]
fn test_zero_assets_guards_every_asset_denominator() {
    let facts: Vec<Fact> = reference_facts()
        .into_iter()
        .map(|f| {
            if f.concept == "Assets" {
                Fact::new("Assets", "0")
            } else {
                f
            }
        })
        .collect();

    assert_eq!(compute_ratios(&facts).get("ReturnOnAssets"), Some(0.0));
    let metrics = compute_regional_metrics(&facts);
    assert_eq!(metrics.get("AssetTurnover"), Some(0.0));
    assert_eq!(metrics.get("EquityRatio"), Some(0.0));
}

#[test]
fn test_empty_facts_produce_all_zero_sets() {
    let ratios = compute_ratios(&[]);
    let metrics = compute_regional_metrics(&[]);

    assert_eq!(ratios.len(), Ratio::all().len());
    assert_eq!(metrics.len(), RegionalMetric::all().len());
    assert!(ratios.iter().chain(metrics.iter()).all(|m| m.value == 0.0));
}

#[test]
fn test_taxonomy_tags_with_substring_ambiguity() {
    // Total assets reported after current assets: substring matching picks
    // AssetsCurrent for "Assets", the prefixed matcher picks the total.
    let facts = vec![
        Fact::new("us-gaap:AssetsCurrent", "400"),
        Fact::new("us-gaap:Assets", "1000"),
        Fact::new("us-gaap:Revenues", "500"),
    ];

    let substring = compute_regional_metrics(&facts);
    assert_relative_eq!(substring.get("AssetTurnover").unwrap(), 1.25);

    let resolver = ConceptResolver::with_kind(&facts, MatcherKind::Prefixed);
    let prefixed = compute_regional_metrics_with(&resolver);
    // "Revenue" no longer matches "Revenues" exactly.
    assert_eq!(prefixed.get("AssetTurnover"), Some(0.0));

    let exact_facts = vec![
        Fact::new("us-gaap:AssetsCurrent", "400"),
        Fact::new("us-gaap:Assets", "1000"),
        Fact::new("us-gaap:Revenue", "500"),
    ];
    let resolver = ConceptResolver::with_kind(&exact_facts, MatcherKind::Prefixed);
    assert_relative_eq!(
        compute_regional_metrics_with(&resolver)
            .get("AssetTurnover")
            .unwrap(),
        0.5
    );
}

#[test]
fn test_exact_matcher_requires_full_tag() {
    let facts = reference_facts();
    let resolver = ConceptResolver::with_kind(&facts, MatcherKind::Exact);
    let ratios = compute_ratios_with(&resolver);
    assert_relative_eq!(ratios.get("CurrentRatio").unwrap(), 2.0);

    let prefixed_facts = vec![Fact::new("us-gaap:Equity", "400")];
    let resolver = ConceptResolver::with_kind(&prefixed_facts, MatcherKind::Exact);
    assert!(resolver.resolve_detailed("Equity").is_missing());
}
