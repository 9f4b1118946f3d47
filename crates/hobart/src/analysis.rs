//! End-to-end analysis of one fact document.
//!
//! Load, flatten, compute both metric sets, then pair each set with the
//! sector benchmarks. Only loading can fail.

use crate::config::AnalysisConfig;
use crate::error::Result;
use hobart_data::{Fact, FactDocument, SectorAverages};
use hobart_output::{
    ChartSeries, ComparisonTable, ExportError, ExportFormat, Exporter, Report, ReportBuilder,
    export::csv_records, export::json_only,
};
use hobart_ratios::{
    ConceptResolver, MetricSet, Resolved, compute_ratios_with, compute_regional_metrics_with,
    registry,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Title of the standard ratio comparison.
pub const RATIOS_TITLE: &str = "Financial Ratios Comparison";

/// Title of the regional metric comparison.
pub const REGIONAL_TITLE: &str = "European Metrics Comparison";

/// How one required concept resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptStatus {
    /// Concept name
    pub concept: &'static str,
    /// Resolution outcome
    pub resolved: Resolved,
}

/// Results of analysing one document.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Configuration the analysis ran with
    pub config: AnalysisConfig,
    /// Flattened facts in document order
    pub facts: Vec<Fact>,
    /// Resolution outcome of every concept the metrics read
    pub concepts: Vec<ConceptStatus>,
    /// Standard ratios
    pub ratios: MetricSet,
    /// Regional metrics
    pub regional_metrics: MetricSet,
    /// Sector benchmarks used for comparison
    pub sector_averages: SectorAverages,
    /// Ratios against sector benchmarks
    pub ratio_comparison: ComparisonTable,
    /// Regional metrics against sector benchmarks
    pub regional_comparison: ComparisonTable,
}

impl Analysis {
    /// Analyses a document against its own sector averages.
    pub fn run(doc: &FactDocument, config: &AnalysisConfig) -> Self {
        Self::run_with_averages(doc, config, doc.sector_averages.clone())
    }

    /// Analyses a document against the given sector averages.
    pub fn run_with_averages(
        doc: &FactDocument,
        config: &AnalysisConfig,
        sector_averages: SectorAverages,
    ) -> Self {
        let facts = config.walk.flatten(doc);
        log::debug!(
            "Flattened {} facts from {} top-level nodes ({:?} walk)",
            facts.len(),
            doc.children().len(),
            config.walk
        );

        let resolver = ConceptResolver::with_kind(&facts, config.matcher);
        let concepts = registry::required_concepts()
            .into_iter()
            .map(|concept| ConceptStatus {
                concept,
                resolved: resolver.resolve_detailed(concept),
            })
            .collect();
        let ratios = compute_ratios_with(&resolver);
        let regional_metrics = compute_regional_metrics_with(&resolver);

        let ratio_comparison = ComparisonTable::new(RATIOS_TITLE, &ratios, &sector_averages);
        let regional_comparison =
            ComparisonTable::new(REGIONAL_TITLE, &regional_metrics, &sector_averages);

        Self {
            config: *config,
            facts,
            concepts,
            ratios,
            regional_metrics,
            sector_averages,
            ratio_comparison,
            regional_comparison,
        }
    }

    /// Loads a document from a file and analyses it.
    pub fn from_path(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<Self> {
        let doc = FactDocument::from_path(path)?;
        Ok(Self::run(&doc, config))
    }

    /// Concepts no fact matched.
    pub fn missing_concepts(&self) -> Vec<&'static str> {
        self.concepts
            .iter()
            .filter(|c| c.resolved.is_missing())
            .map(|c| c.concept)
            .collect()
    }

    /// Chart hand-offs for both comparisons, ratios first.
    pub fn charts(&self) -> [ChartSeries; 2] {
        [
            ChartSeries::from(&self.ratio_comparison),
            ChartSeries::from(&self.regional_comparison),
        ]
    }

    /// Writes each chart series as pretty JSON into `dir`, creating it if
    /// needed. Returns the written paths, ratios first.
    pub fn write_charts(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for chart in self.charts() {
            let path = dir.join(chart.file_name("json"));
            std::fs::write(&path, serde_json::to_string_pretty(&chart)?)?;
            log::debug!("Wrote {} chart groups to {}", chart.len(), path.display());
            written.push(path);
        }
        Ok(written)
    }

    /// Report over both comparisons, noting the matcher and any unresolved
    /// concepts.
    pub fn report(&self, source: impl Into<String>) -> Result<Report> {
        let mut builder = ReportBuilder::new()
            .source(source)
            .note(format!("Facts extracted: {}", self.facts.len()))
            .note(format!("Concept matcher: {}", self.config.matcher));
        let missing = self.missing_concepts();
        if !missing.is_empty() {
            builder = builder.note(format!("Missing concepts: {}", missing.join(", ")));
        }
        Ok(builder
            .table(self.ratio_comparison.clone())
            .table(self.regional_comparison.clone())
            .build()?)
    }

    /// Format both comparisons as ASCII tables.
    pub fn to_ascii(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Facts extracted: {}\n", self.facts.len()));
        let missing = self.missing_concepts();
        if !missing.is_empty() {
            output.push_str(&format!("Missing concepts: {}\n", missing.join(", ")));
        }
        output.push_str(&self.ratio_comparison.to_ascii_table());
        output.push_str(&self.regional_comparison.to_ascii_table());
        output
    }

    /// Format both comparisons as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("# Financial Analysis\n\n");
        output.push_str(&format!("- **Facts extracted:** {}\n", self.facts.len()));
        output.push_str(&format!("- **Concept matcher:** {}\n", self.config.matcher));
        let missing = self.missing_concepts();
        if !missing.is_empty() {
            output.push_str(&format!("- **Missing concepts:** {}\n", missing.join(", ")));
        }
        output.push('\n');
        output.push_str(&self.ratio_comparison.to_markdown());
        output.push('\n');
        output.push_str(&self.regional_comparison.to_markdown());
        output
    }
}

/// One comparison row tagged with the table it belongs to.
#[derive(Debug, Serialize)]
struct AnalysisRow<'a> {
    table: &'a str,
    label: &'a str,
    company_value: f64,
    sector_value: f64,
    has_benchmark: bool,
}

/// CSV exports both comparison tables as one sheet; JSON exports everything.
impl Exporter for Analysis {
    fn export_to_string(&self, format: ExportFormat) -> std::result::Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_records(
                [&self.ratio_comparison, &self.regional_comparison]
                    .into_iter()
                    .flat_map(|table| {
                        table.rows.iter().map(move |row| AnalysisRow {
                            table: &table.title,
                            label: &row.label,
                            company_value: row.company_value,
                            sector_value: row.sector_value,
                            has_benchmark: row.has_benchmark,
                        })
                    }),
            ),
            _ => json_only(self, format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::RawNode;
    use hobart_ratios::MatcherKind;

    fn doc() -> FactDocument {
        let root = RawNode::default()
            .with_child(RawNode::fact("us-gaap:AssetsCurrent", "400"))
            .with_child(RawNode::fact("us-gaap:Assets", "1000"))
            .with_child(RawNode::fact("us-gaap:Revenues", "500"));
        FactDocument::new(root)
            .with_sector_averages([("AssetTurnover", 0.7)].into_iter().collect())
    }

    #[test]
    fn test_run_uses_document_averages() {
        let analysis = Analysis::run(&doc(), &AnalysisConfig::default());

        assert_eq!(analysis.facts.len(), 3);
        assert_eq!(analysis.ratio_comparison.rows.len(), 5);
        assert_eq!(analysis.regional_comparison.rows.len(), 4);
        assert_eq!(analysis.regional_comparison.rows[0].sector_value, 0.7);
        assert_eq!(analysis.regional_comparison.benchmarked_count(), 1);
    }

    #[test]
    fn test_missing_concepts_follow_matcher() {
        let substring = Analysis::run(&doc(), &AnalysisConfig::default());
        assert!(!substring.missing_concepts().contains(&"Assets"));
        assert!(substring.missing_concepts().contains(&"Equity"));

        let config = AnalysisConfig::default().with_matcher(MatcherKind::Prefixed);
        let prefixed = Analysis::run(&doc(), &config);
        assert!(prefixed.missing_concepts().contains(&"Revenue"));
    }

    #[test]
    fn test_charts_titles() {
        let analysis = Analysis::run(&doc(), &AnalysisConfig::default());
        let [ratios, regional] = analysis.charts();
        assert_eq!(ratios.file_stem(), "financial_ratios_comparison");
        assert_eq!(regional.file_stem(), "european_metrics_comparison");
    }

    #[test]
    fn test_csv_export_tags_tables() {
        let analysis = Analysis::run(&doc(), &AnalysisConfig::default());
        let csv = analysis.export_to_string(ExportFormat::Csv).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("table,label,company_value,sector_value,has_benchmark")
        );
        assert_eq!(csv.lines().count(), 10);
        assert!(csv.contains("European Metrics Comparison,AssetTurnover,1.25,0.7,true"));
    }
}
