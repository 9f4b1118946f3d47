//! Chart data hand-off.
//!
//! Hobart draws no images. A [`ChartSeries`] carries everything a renderer
//! needs for a grouped bar chart of company against sector values.

use crate::comparison::{ComparisonTable, SectorComparison};
use serde::{Deserialize, Serialize};

/// Grouped bar chart data: one group per label, two bars per group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    /// Chart title.
    pub title: String,

    /// Category labels in computed-set order.
    pub labels: Vec<String>,

    /// Company values, aligned with `labels`.
    pub company_values: Vec<f64>,

    /// Sector values, aligned with `labels` (`0.0` where no benchmark).
    pub sector_values: Vec<f64>,
}

impl ChartSeries {
    /// Build a series from comparison rows.
    pub fn from_comparison(title: impl Into<String>, rows: &[SectorComparison]) -> Self {
        Self {
            title: title.into(),
            labels: rows.iter().map(|r| r.label.clone()).collect(),
            company_values: rows.iter().map(|r| r.company_value).collect(),
            sector_values: rows.iter().map(|r| r.sector_value).collect(),
        }
    }

    /// Number of label groups.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the chart has no groups.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// File name stem for the rendered artifact: the title lower-cased with
    /// spaces replaced by underscores.
    pub fn file_stem(&self) -> String {
        self.title.to_lowercase().replace(' ', "_")
    }

    /// File name for the rendered artifact with the given extension.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem(), extension)
    }
}

impl From<&ComparisonTable> for ChartSeries {
    fn from(table: &ComparisonTable) -> Self {
        Self::from_comparison(table.title.clone(), &table.rows)
    }
}
