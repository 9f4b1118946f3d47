//! Concept names resolved by the ratio and regional metric engines.
//!
//! These are the search terms handed to the [`ConceptMatcher`](crate::ConceptMatcher),
//! not full taxonomy tags. Under the default substring policy `ASSETS` also
//! matches `us-gaap:AssetsCurrent`, so document order decides which fact wins.

/// Balance sheet concepts
pub mod balance_sheet {
    /// Total Assets
    pub const ASSETS: &str = "Assets";

    /// Current Assets
    pub const CURRENT_ASSETS: &str = "CurrentAssets";

    /// Total Liabilities
    pub const LIABILITIES: &str = "Liabilities";

    /// Current Liabilities
    pub const CURRENT_LIABILITIES: &str = "CurrentLiabilities";

    /// Shareholders' Equity
    pub const EQUITY: &str = "Equity";
}

/// Income statement concepts
pub mod income_statement {
    /// Net Income (Loss)
    pub const PROFIT_LOSS: &str = "ProfitLoss";

    /// Revenue
    pub const REVENUE: &str = "Revenue";

    /// Revenue of the prior fiscal year
    pub const PRIOR_YEAR_REVENUE: &str = "PriorYearRevenue";
}
