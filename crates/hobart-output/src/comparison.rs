//! Sector comparison.
//!
//! Pairs each computed metric with the sector benchmark of the same label.
//! The computed set defines which labels appear; benchmarks for other labels
//! are ignored and missing benchmarks read as `0.0`.

use hobart_data::SectorAverages;
use hobart_ratios::MetricSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One metric next to its sector benchmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorComparison {
    /// Metric label.
    pub label: String,

    /// Value computed for the company.
    pub company_value: f64,

    /// Sector benchmark, `0.0` when none was supplied.
    pub sector_value: f64,

    /// Whether a benchmark was supplied for this label.
    pub has_benchmark: bool,
}

impl SectorComparison {
    /// Create a new comparison row.
    pub fn new(label: impl Into<String>, company_value: f64, sector_value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            company_value,
            sector_value: sector_value.unwrap_or(0.0),
            has_benchmark: sector_value.is_some(),
        }
    }

    /// Company value minus sector value.
    pub fn difference(&self) -> f64 {
        self.company_value - self.sector_value
    }
}

impl fmt::Display for SectorComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_benchmark {
            write!(
                f,
                "{}: {:.4} (sector: {:.4}, diff: {:+.4})",
                self.label,
                self.company_value,
                self.sector_value,
                self.difference()
            )
        } else {
            write!(f, "{}: {:.4} (no sector benchmark)", self.label, self.company_value)
        }
    }
}

/// Pairs every computed metric with its sector benchmark, in computed order.
pub fn pair(computed: &MetricSet, sector_averages: &SectorAverages) -> Vec<SectorComparison> {
    computed
        .iter()
        .map(|m| SectorComparison::new(&m.label, m.value, sector_averages.get(&m.label)))
        .collect()
}

/// A titled set of comparison rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonTable {
    /// Table title (e.g., "Financial Ratios Comparison").
    pub title: String,

    /// Rows in computed order.
    pub rows: Vec<SectorComparison>,
}

impl ComparisonTable {
    /// Build a table by pairing a computed set with sector benchmarks.
    pub fn new(
        title: impl Into<String>,
        computed: &MetricSet,
        sector_averages: &SectorAverages,
    ) -> Self {
        Self {
            title: title.into(),
            rows: pair(computed, sector_averages),
        }
    }

    /// Number of rows with a supplied benchmark.
    pub fn benchmarked_count(&self) -> usize {
        self.rows.iter().filter(|r| r.has_benchmark).count()
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.title));
        output.push_str(&"=".repeat(70));
        output.push('\n');

        output.push_str(&format!(
            "{:<22} {:>15} {:>15} {:>15}\n",
            "Metric", "Company", "Sector", "Difference"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for row in &self.rows {
            let (sector, diff) = if row.has_benchmark {
                (
                    format!("{:.4}", row.sector_value),
                    format!("{:+.4}", row.difference()),
                )
            } else {
                ("n/a".to_string(), "n/a".to_string())
            };
            output.push_str(&format!(
                "{:<22} {:>15.4} {:>15} {:>15}\n",
                row.label, row.company_value, sector, diff
            ));
        }

        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Sector benchmarks: {} of {}\n",
            self.benchmarked_count(),
            self.rows.len()
        ));

        output
    }

    /// Format as Markdown table for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", self.title));
        output.push_str("| Metric | Company | Sector | Difference |\n");
        output.push_str("|--------|---------|--------|------------|\n");

        for row in &self.rows {
            if row.has_benchmark {
                output.push_str(&format!(
                    "| {} | {:.4} | {:.4} | {:+.4} |\n",
                    row.label,
                    row.company_value,
                    row.sector_value,
                    row.difference()
                ));
            } else {
                output.push_str(&format!(
                    "| {} | {:.4} | n/a | n/a |\n",
                    row.label, row.company_value
                ));
            }
        }

        output
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii_table())
    }
}
