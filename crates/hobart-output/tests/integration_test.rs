//! Integration tests for sector comparison, chart hand-off and export.

use hobart_data::{Fact, SectorAverages};
use hobart_output::{
    ChartSeries, ComparisonTable, ExportFormat, Exporter, ReportBuilder, pair,
};
use hobart_ratios::{compute_ratios, compute_regional_metrics};

fn facts() -> Vec<Fact> {
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
    .map(|(c, v)| Fact::new(c, v))
    .collect()
}

#[test]
fn test_comparator_completeness() {
    let ratios = compute_ratios(&facts());
    let averages: SectorAverages = [
        ("CurrentRatio", 1.2),
        ("ReturnOnEquity", 0.15),
        ("AssetTurnover", 0.7),
    ]
    .into_iter()
    .collect();

    let rows = pair(&ratios, &averages);
    assert_eq!(rows.len(), ratios.len());

    for (row, metric) in rows.iter().zip(ratios.iter()) {
        assert_eq!(row.label, metric.label);
        assert_eq!(row.company_value, metric.value);
        match averages.get(&row.label) {
            Some(v) => assert_eq!(row.sector_value, v),
            None => assert_eq!(row.sector_value, 0.0),
        }
    }
    // AssetTurnover is a regional label and must not leak into the ratio rows.
    assert!(rows.iter().all(|r| r.label != "AssetTurnover"));
}

#[test]
fn test_empty_sector_averages() {
    let metrics = compute_regional_metrics(&facts());
    let rows = pair(&metrics, &SectorAverages::new());
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.sector_value == 0.0 && !r.has_benchmark));
}

#[test]
fn test_table_to_chart_and_export() {
    let averages: SectorAverages = [("EquityRatio", 0.35)].into_iter().collect();
    let table = ComparisonTable::new(
        "European Metrics Comparison",
        &compute_regional_metrics(&facts()),
        &averages,
    );

    let chart = ChartSeries::from(&table);
    assert_eq!(chart.file_stem(), "european_metrics_comparison");
    assert_eq!(
        chart.labels,
        ["AssetTurnover", "WorkingCapital", "EquityRatio", "RevenueGrowth"]
    );
    assert_eq!(chart.sector_values, [0.0, 0.0, 0.35, 0.0]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.csv");
    table.rows.export_to_file(&path, ExportFormat::Csv).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 5);
    assert!(written.contains("EquityRatio,0.4,0.35,true"));
}

#[test]
fn test_report_written_as_markdown_and_json() {
    let table = ComparisonTable::new(
        "Financial Ratios Comparison",
        &compute_ratios(&facts()),
        &SectorAverages::new(),
    );
    let report = ReportBuilder::new()
        .source("aapl.json")
        .table(table)
        .build()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let md_path = dir.path().join("report.md");
    let json_path = dir.path().join("report.json");
    report.write_to(&md_path).unwrap();
    report.write_to(&json_path).unwrap();

    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("## Financial Ratios Comparison"));
    assert!(md.contains("| CurrentRatio | 2.0000 | n/a | n/a |"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["source"], "aapl.json");
    assert_eq!(json["tables"][0]["rows"][0]["label"], "CurrentRatio");
    assert_eq!(json["tables"][0]["rows"][0]["company_value"], 2.0);
}
