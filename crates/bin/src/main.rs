//! Hobart CLI binary.
//!
//! Provides command-line interface for fact extraction and ratio analysis.

use clap::{Parser, Subcommand, ValueEnum};
use hobart::data::{
    FactColumn, FactDocument, StatementCategory, filter_by_category, group_by_context, search,
    sort_facts,
};
use hobart::output::{ExportFormat, Exporter};
use hobart::ratios::{MatcherKind, MetricCategory, MetricInfo, get_metric_info, metrics_by_category};
use hobart::{Analysis, AnalysisConfig, BenchmarkSet, GicsSector, HobartError, Walk};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: XBRL fact extraction and financial ratio analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ratios and regional metrics and compare them to sector averages
    Analyze {
        /// Fact document (JSON)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Concept matching strategy (substring, exact or prefixed)
        #[arg(long, default_value_t = MatcherKind::Substring)]
        matcher: MatcherKind,

        /// Walk every nested node instead of only top-level facts
        #[arg(long)]
        nested: bool,

        /// Sector benchmark file replacing the document's sector averages
        #[arg(long, requires = "sector")]
        benchmarks: Option<PathBuf>,

        /// GICS sector (name or code) to take from the benchmark file
        #[arg(long, requires = "benchmarks")]
        sector: Option<GicsSector>,

        /// Also export the comparison tables to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format (csv, json or pretty-json; default from extension)
        #[arg(long, requires = "export")]
        export_format: Option<ExportFormat>,

        /// Write a timestamped report (Markdown for .md, JSON otherwise)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write bar chart data for both comparisons into this directory
        #[arg(long, value_name = "DIR")]
        charts: Option<PathBuf>,
    },

    /// List extracted facts grouped by reporting context
    Facts {
        /// Fact document (JSON)
        file: PathBuf,

        /// Only show facts of one financial statement
        #[arg(long)]
        category: Option<StatementCategory>,

        /// Only show facts whose concept, value, unit or decimals contain this text
        #[arg(long)]
        search: Option<String>,

        /// Sort each context's facts by a column (concept, value, unit or decimals)
        #[arg(long)]
        sort: Option<FactColumn>,

        /// Walk every nested node instead of only top-level facts
        #[arg(long)]
        nested: bool,
    },

    /// List the available ratios and metrics, or describe one of them
    Metrics {
        /// Metric label, e.g. ReturnOnEquity
        name: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(if e.is_not_found() { 2 } else { 1 });
    }
}

fn run(command: Commands) -> Result<(), HobartError> {
    match command {
        Commands::Analyze {
            file,
            format,
            matcher,
            nested,
            benchmarks,
            sector,
            export,
            export_format,
            report,
            charts,
        } => {
            let config = AnalysisConfig::default()
                .with_matcher(matcher)
                .with_walk(walk(nested));
            let benchmark = match (benchmarks, sector) {
                (Some(path), Some(sector)) => Some((path, sector)),
                _ => None,
            };
            let analysis = analyze(&file, &config, benchmark)?;
            print_analysis(&file, &analysis, format)?;
            if let Some(path) = export {
                export_analysis(&analysis, &path, export_format)?;
            }
            if let Some(path) = report {
                analysis
                    .report(file.display().to_string())?
                    .write_to(&path)?;
                eprintln!("Wrote report to {}", path.display());
            }
            if let Some(dir) = charts {
                for path in analysis.write_charts(&dir)? {
                    eprintln!("Wrote chart data to {}", path.display());
                }
            }
        }
        Commands::Facts {
            file,
            category,
            search,
            sort,
            nested,
        } => {
            list_facts(&file, category, search.as_deref(), sort, walk(nested))?;
        }
        Commands::Metrics { name: None } => list_metrics(),
        Commands::Metrics { name: Some(name) } => {
            let info = get_metric_info(&name).ok_or(HobartError::UnknownMetric(name))?;
            print_metric(&info);
        }
    }

    Ok(())
}

const fn walk(nested: bool) -> Walk {
    if nested { Walk::Nested } else { Walk::Children }
}

fn analyze(
    file: &Path,
    config: &AnalysisConfig,
    benchmark: Option<(PathBuf, GicsSector)>,
) -> Result<Analysis, HobartError> {
    let doc = FactDocument::from_path(file)?;

    let analysis = match benchmark {
        Some((path, sector)) => {
            let set = BenchmarkSet::from_path(&path)?;
            let averages = set.averages_for(sector).cloned().ok_or_else(|| {
                HobartError::Benchmark(format!(
                    "{} has no averages for sector {}",
                    path.display(),
                    sector
                ))
            })?;
            log::info!("Comparing against {} benchmarks", sector);
            Analysis::run_with_averages(&doc, config, averages)
        }
        None => Analysis::run(&doc, config),
    };
    Ok(analysis)
}

fn print_analysis(
    file: &Path,
    analysis: &Analysis,
    format: OutputFormat,
) -> Result<(), HobartError> {
    match format {
        OutputFormat::Text => {
            println!("Source: {}", file.display());
            print!("{}", analysis.to_ascii());
        }
        OutputFormat::Markdown => print!("{}", analysis.to_markdown()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(analysis)?),
    }

    Ok(())
}

fn export_analysis(
    analysis: &Analysis,
    path: &Path,
    format: Option<ExportFormat>,
) -> Result<(), HobartError> {
    let format = format
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or(ExportFormat::PrettyJson);
    analysis.export_to_file(path, format)?;
    eprintln!("Exported {} to {}", format, path.display());
    Ok(())
}

fn list_facts(
    file: &Path,
    category: Option<StatementCategory>,
    term: Option<&str>,
    sort: Option<FactColumn>,
    walk: Walk,
) -> Result<(), HobartError> {
    let doc = FactDocument::from_path(file)?;
    let mut facts = walk.flatten(&doc);
    if let Some(term) = term {
        facts = search(&facts, term).into_iter().cloned().collect();
    }

    let mut groups = group_by_context(&facts);
    if let Some(category) = category {
        groups = filter_by_category(&groups, category);
    }
    if let Some(column) = sort {
        for group in &mut groups {
            sort_facts(&mut group.facts, column);
        }
    }

    if groups.is_empty() {
        println!("No facts found.");
        return Ok(());
    }

    for group in &groups {
        let context = if group.context_ref.is_empty() {
            "(no context)"
        } else {
            group.context_ref.as_str()
        };
        println!("\nContext: {} ({} facts)", context, group.facts.len());
        println!("{}", "-".repeat(70));
        for fact in &group.facts {
            println!(
                "  {:40} {:>20} {:>6} {:>5}",
                fact.concept, fact.value_text, fact.unit_ref, fact.decimals
            );
        }
    }
    println!();

    Ok(())
}

fn list_metrics() {
    for category in [MetricCategory::Ratio, MetricCategory::Regional] {
        println!("\n{}", category);
        println!("{}", "=".repeat(70));
        for info in metrics_by_category(category) {
            println!("  {:20} {}", info.name, info.formula);
            println!("  {:20} {}", "", info.description);
        }
    }
    println!();
}

fn print_metric(info: &MetricInfo) {
    println!("{} ({})", info.name, info.category);
    println!("  Formula:     {}", info.formula);
    println!("  Description: {}", info.description);
    println!("  Concepts:    {}", info.required_concepts.join(", "));
}
