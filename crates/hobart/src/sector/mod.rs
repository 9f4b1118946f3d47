//! Sector benchmarks.
//!
//! A benchmark file maps GICS sectors to sector-average tables:
//!
//! ```json
//! {
//!   "Information Technology": {"CurrentRatio": 1.4, "ReturnOnEquity": 0.22},
//!   "45": {"ProfitMargin": 0.18}
//! }
//! ```
//!
//! Keys may be sector names or codes. Tables for the same sector are merged,
//! later keys overriding earlier ones.

pub mod gics;

pub use gics::GicsSector;

use crate::error::{HobartError, Result};
use hobart_data::SectorAverages;
use std::collections::HashMap;
use std::path::Path;

/// Sector-average tables keyed by GICS sector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSet {
    sectors: HashMap<GicsSector, SectorAverages>,
}

impl BenchmarkSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table for a sector.
    pub fn insert(&mut self, sector: GicsSector, averages: SectorAverages) {
        self.sectors.insert(sector, averages);
    }

    /// Averages for a sector, if any were supplied.
    pub fn averages_for(&self, sector: GicsSector) -> Option<&SectorAverages> {
        self.sectors.get(&sector)
    }

    /// Sectors with a table, in GICS code order.
    pub fn sectors(&self) -> Vec<GicsSector> {
        let mut sectors: Vec<GicsSector> = self.sectors.keys().copied().collect();
        sectors.sort();
        sectors
    }

    /// Number of sectors with a table.
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Returns true if no sector has a table.
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Parses a benchmark file's JSON.
    pub fn parse_json(json: &str) -> Result<Self> {
        let raw: Vec<(String, SectorAverages)> =
            serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(json)
                .map_err(|e| HobartError::Benchmark(format!("invalid benchmark file: {e}")))?
                .into_iter()
                .map(|(key, value)| {
                    serde_json::from_value(value)
                        .map(|avgs| (key.clone(), avgs))
                        .map_err(|e| {
                            HobartError::Benchmark(format!("invalid averages for {key}: {e}"))
                        })
                })
                .collect::<Result<_>>()?;

        let mut set = Self::new();
        for (key, averages) in raw {
            let sector: GicsSector = key.parse().map_err(HobartError::Benchmark)?;
            let entry = set.sectors.entry(sector).or_default();
            for (label, value) in averages.iter() {
                entry.insert(label, value);
            }
        }
        Ok(set)
    }

    /// Loads a benchmark file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let set = Self::parse_json(&json)?;
        log::info!(
            "Loaded sector benchmarks for {} sectors from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }
}
