//! Metric Registry
//!
//! Central registry of every metric the engines produce, with the concepts
//! each one reads.

use crate::ratios::Ratio;
use crate::regional::RegionalMetric;
use serde::Serialize;
use std::fmt;

/// Metric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricCategory {
    /// Standard financial ratios
    Ratio,
    /// Regional metrics
    Regional,
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio => f.write_str("Financial Ratios"),
            Self::Regional => f.write_str("European Metrics"),
        }
    }
}

/// Metric metadata
#[derive(Debug, Clone, Serialize)]
pub struct MetricInfo {
    /// Metric label (unique identifier)
    pub name: &'static str,
    /// Metric category
    pub category: MetricCategory,
    /// Brief description of what the metric measures
    pub description: &'static str,
    /// Formula in terms of concept names
    pub formula: &'static str,
    /// Concepts the metric resolves
    pub required_concepts: Vec<&'static str>,
}

const fn ratio_text(ratio: Ratio) -> (&'static str, &'static str) {
    match ratio {
        Ratio::CurrentRatio => (
            "Short-term liquidity: current assets per unit of current liabilities",
            "CurrentAssets / CurrentLiabilities",
        ),
        Ratio::DebtToEquityRatio => (
            "Financial leverage: total liabilities per unit of equity",
            "Liabilities / Equity",
        ),
        Ratio::ReturnOnAssets => (
            "Profitability relative to total assets",
            "ProfitLoss / Assets",
        ),
        Ratio::ReturnOnEquity => (
            "Profitability relative to shareholders' equity",
            "ProfitLoss / Equity",
        ),
        Ratio::ProfitMargin => ("Net income per unit of revenue", "ProfitLoss / Revenue"),
    }
}

const fn regional_text(metric: RegionalMetric) -> (&'static str, &'static str) {
    match metric {
        RegionalMetric::AssetTurnover => (
            "Revenue generated per unit of total assets",
            "Revenue / Assets",
        ),
        RegionalMetric::WorkingCapital => (
            "Current assets left after covering current liabilities",
            "CurrentAssets - CurrentLiabilities",
        ),
        RegionalMetric::EquityRatio => (
            "Share of total assets financed by equity",
            "Equity / Assets",
        ),
        RegionalMetric::RevenueGrowth => (
            "Year-over-year revenue growth",
            "(Revenue - PriorYearRevenue) / PriorYearRevenue",
        ),
    }
}

/// Get all available metric info, ratios first
pub fn available_metrics() -> Vec<MetricInfo> {
    let ratios = Ratio::all().into_iter().map(|ratio| {
        let (description, formula) = ratio_text(ratio);
        MetricInfo {
            name: ratio.label(),
            category: MetricCategory::Ratio,
            description,
            formula,
            required_concepts: vec![ratio.numerator(), ratio.denominator()],
        }
    });

    let regional = RegionalMetric::all().into_iter().map(|metric| {
        let (description, formula) = regional_text(metric);
        MetricInfo {
            name: metric.label(),
            category: MetricCategory::Regional,
            description,
            formula,
            required_concepts: metric.required_concepts().to_vec(),
        }
    });

    ratios.chain(regional).collect()
}

/// Get metrics by category
pub fn metrics_by_category(category: MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|m| m.category == category)
        .collect()
}

/// Get metric info by name
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.name == name)
}

/// Every distinct concept any metric resolves, in first-use order
pub fn required_concepts() -> Vec<&'static str> {
    let mut concepts: Vec<&'static str> = Vec::new();
    for metric in available_metrics() {
        for concept in metric.required_concepts {
            if !concepts.contains(&concept) {
                concepts.push(concept);
            }
        }
    }
    concepts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_metrics_count() {
        // 5 ratios + 4 regional metrics
        assert_eq!(available_metrics().len(), 9);
    }

    #[test]
    fn test_metrics_by_category() {
        assert_eq!(metrics_by_category(MetricCategory::Ratio).len(), 5);
        assert_eq!(metrics_by_category(MetricCategory::Regional).len(), 4);
    }

    #[test]
    fn test_get_metric_info() {
        let roe = get_metric_info("ReturnOnEquity").unwrap();
        assert_eq!(roe.category, MetricCategory::Ratio);
        assert_eq!(roe.required_concepts, ["ProfitLoss", "Equity"]);

        let wc = get_metric_info("WorkingCapital").unwrap();
        assert_eq!(wc.category, MetricCategory::Regional);
        assert_eq!(wc.formula, "CurrentAssets - CurrentLiabilities");

        assert!(get_metric_info("nonexistent_metric").is_none());
    }

    #[test]
    fn test_required_concepts() {
        let concepts = required_concepts();
        assert_eq!(concepts.len(), 8);
        assert!(concepts.contains(&"PriorYearRevenue"));
        assert_eq!(concepts[0], "CurrentAssets");
    }

    #[test]
    fn test_all_metrics_have_required_concepts() {
        for metric in available_metrics() {
            assert!(
                !metric.required_concepts.is_empty(),
                "Metric {} has no required concepts",
                metric.name
            );
            assert!(!metric.description.is_empty());
        }
    }
}
