//! Timestamped comparison reports.
//!
//! A report bundles the comparison tables of one document with free-form
//! notes and renders them as pretty JSON or Markdown.

use crate::comparison::ComparisonTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required field missing from the builder.
    #[error("Report is missing {0}")]
    Missing(&'static str),
}

/// Comparison tables for one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Document the tables were computed from.
    pub source: String,

    /// Generation time.
    pub generated_at: DateTime<Utc>,

    /// Tables in presentation order.
    pub tables: Vec<ComparisonTable>,

    /// Remarks such as unresolved concepts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Report {
    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Markdown rendering.
    pub fn to_markdown(&self) -> String {
        let mut output = format!("# Report: {}\n\n", self.source);
        output.push_str(&format!(
            "_Generated {}_\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        for note in &self.notes {
            output.push_str(&format!("- {}\n", note));
        }
        if !self.notes.is_empty() {
            output.push('\n');
        }
        for table in &self.tables {
            output.push_str(&table.to_markdown());
            output.push('\n');
        }
        output
    }

    /// Writes the report, as Markdown for `.md` paths and JSON otherwise.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let markdown = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("md"));
        let content = if markdown {
            self.to_markdown()
        } else {
            self.to_json()?
        };
        std::fs::write(path, content)?;
        log::info!("Wrote report for {} to {}", self.source, path.display());
        Ok(())
    }
}

/// Builder for [`Report`].
#[derive(Debug, Default)]
pub struct ReportBuilder {
    source: Option<String>,
    tables: Vec<ComparisonTable>,
    notes: Vec<String>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source document.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Append a comparison table.
    pub fn table(mut self, table: ComparisonTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Append a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the report, stamped with the current time.
    pub fn build(self) -> Result<Report, ReportError> {
        let source = self.source.ok_or(ReportError::Missing("a source"))?;
        Ok(Report {
            source,
            generated_at: Utc::now(),
            tables: self.tables,
            notes: self.notes,
        })
    }
}
