//! Standard financial ratios.
//!
//! | Ratio | Formula |
//! |---|---|
//! | CurrentRatio | CurrentAssets / CurrentLiabilities |
//! | DebtToEquityRatio | Liabilities / Equity |
//! | ReturnOnAssets | ProfitLoss / Assets |
//! | ReturnOnEquity | ProfitLoss / Equity |
//! | ProfitMargin | ProfitLoss / Revenue |
//!
//! A ratio whose denominator resolves to zero is reported as `0.0`.

use crate::concepts::{balance_sheet, income_statement};
use crate::metric::{MetricSet, safe_div};
use crate::resolve::ConceptResolver;
use hobart_data::Fact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The standard ratios, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ratio {
    /// Liquidity: current assets over current liabilities
    CurrentRatio,

    /// Leverage: total liabilities over equity
    DebtToEquityRatio,

    /// Profitability: net income over total assets
    ReturnOnAssets,

    /// Profitability: net income over equity
    ReturnOnEquity,

    /// Profitability: net income over revenue
    ProfitMargin,
}

impl Ratio {
    /// Returns all ratios in output order.
    pub const fn all() -> [Self; 5] {
        [
            Self::CurrentRatio,
            Self::DebtToEquityRatio,
            Self::ReturnOnAssets,
            Self::ReturnOnEquity,
            Self::ProfitMargin,
        ]
    }

    /// Output label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "CurrentRatio",
            Self::DebtToEquityRatio => "DebtToEquityRatio",
            Self::ReturnOnAssets => "ReturnOnAssets",
            Self::ReturnOnEquity => "ReturnOnEquity",
            Self::ProfitMargin => "ProfitMargin",
        }
    }

    /// Concept resolved for the numerator.
    pub const fn numerator(&self) -> &'static str {
        match self {
            Self::CurrentRatio => balance_sheet::CURRENT_ASSETS,
            Self::DebtToEquityRatio => balance_sheet::LIABILITIES,
            Self::ReturnOnAssets | Self::ReturnOnEquity | Self::ProfitMargin => {
                income_statement::PROFIT_LOSS
            }
        }
    }

    /// Concept resolved for the denominator.
    pub const fn denominator(&self) -> &'static str {
        match self {
            Self::CurrentRatio => balance_sheet::CURRENT_LIABILITIES,
            Self::DebtToEquityRatio | Self::ReturnOnEquity => balance_sheet::EQUITY,
            Self::ReturnOnAssets => balance_sheet::ASSETS,
            Self::ProfitMargin => income_statement::REVENUE,
        }
    }

    /// Computes this ratio.
    pub fn compute(&self, resolver: &ConceptResolver<'_>) -> f64 {
        safe_div(
            resolver.resolve(self.numerator()),
            resolver.resolve(self.denominator()),
        )
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes all standard ratios with the given resolver.
pub fn compute_ratios_with(resolver: &ConceptResolver<'_>) -> MetricSet {
    Ratio::all()
        .into_iter()
        .map(|ratio| (ratio.label(), ratio.compute(resolver)))
        .collect()
}

/// Computes all standard ratios with the default substring matcher.
pub fn compute_ratios(facts: &[Fact]) -> MetricSet {
    compute_ratios_with(&ConceptResolver::new(facts))
}
