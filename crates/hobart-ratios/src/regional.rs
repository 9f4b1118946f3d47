//! Regional (European-style) metrics.
//!
//! | Metric | Formula |
//! |---|---|
//! | AssetTurnover | Revenue / Assets |
//! | WorkingCapital | CurrentAssets - CurrentLiabilities |
//! | EquityRatio | Equity / Assets |
//! | RevenueGrowth | (Revenue - PriorYearRevenue) / PriorYearRevenue |
//!
//! Divisions follow the same zero-denominator rule as the standard ratios.
//! Working capital is a plain difference and may be negative.

use crate::concepts::{balance_sheet, income_statement};
use crate::metric::{MetricSet, safe_div};
use crate::resolve::ConceptResolver;
use hobart_data::Fact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The regional metrics, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionalMetric {
    /// Efficiency: revenue over total assets
    AssetTurnover,

    /// Liquidity: current assets minus current liabilities
    WorkingCapital,

    /// Solvency: equity over total assets
    EquityRatio,

    /// Growth: year-over-year revenue change
    RevenueGrowth,
}

impl RegionalMetric {
    /// Returns all regional metrics in output order.
    pub const fn all() -> [Self; 4] {
        [
            Self::AssetTurnover,
            Self::WorkingCapital,
            Self::EquityRatio,
            Self::RevenueGrowth,
        ]
    }

    /// Output label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AssetTurnover => "AssetTurnover",
            Self::WorkingCapital => "WorkingCapital",
            Self::EquityRatio => "EquityRatio",
            Self::RevenueGrowth => "RevenueGrowth",
        }
    }

    /// Concepts the metric reads.
    pub const fn required_concepts(&self) -> &'static [&'static str] {
        match self {
            Self::AssetTurnover => &[income_statement::REVENUE, balance_sheet::ASSETS],
            Self::WorkingCapital => &[
                balance_sheet::CURRENT_ASSETS,
                balance_sheet::CURRENT_LIABILITIES,
            ],
            Self::EquityRatio => &[balance_sheet::EQUITY, balance_sheet::ASSETS],
            Self::RevenueGrowth => &[
                income_statement::REVENUE,
                income_statement::PRIOR_YEAR_REVENUE,
            ],
        }
    }

    /// Computes this metric.
    pub fn compute(&self, resolver: &ConceptResolver<'_>) -> f64 {
        match self {
            Self::AssetTurnover => safe_div(
                resolver.resolve(income_statement::REVENUE),
                resolver.resolve(balance_sheet::ASSETS),
            ),
            Self::WorkingCapital => {
                resolver.resolve(balance_sheet::CURRENT_ASSETS)
                    - resolver.resolve(balance_sheet::CURRENT_LIABILITIES)
            }
            Self::EquityRatio => safe_div(
                resolver.resolve(balance_sheet::EQUITY),
                resolver.resolve(balance_sheet::ASSETS),
            ),
            Self::RevenueGrowth => {
                let prior = resolver.resolve(income_statement::PRIOR_YEAR_REVENUE);
                safe_div(resolver.resolve(income_statement::REVENUE) - prior, prior)
            }
        }
    }
}

impl fmt::Display for RegionalMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes all regional metrics with the given resolver.
pub fn compute_regional_metrics_with(resolver: &ConceptResolver<'_>) -> MetricSet {
    RegionalMetric::all()
        .into_iter()
        .map(|metric| (metric.label(), metric.compute(resolver)))
        .collect()
}

/// Computes all regional metrics with the default substring matcher.
pub fn compute_regional_metrics(facts: &[Fact]) -> MetricSet {
    compute_regional_metrics_with(&ConceptResolver::new(facts))
}
