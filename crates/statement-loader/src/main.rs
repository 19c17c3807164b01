//! statement-loader: parse statement workbooks and print analysis as JSON.
//!
//! Usage:
//!   cargo run -p statement-loader -- analyze report.xlsx --organization "Acme" --period 2024
//!   cargo run -p statement-loader -- compare 2023.xlsx 2024.xlsx --pretty
//!
//! Defaults for organization, period and the owning user come from the environment
//! (`REPORT_ORGANIZATION`, `REPORT_PERIOD`, `REPORT_OWNER_ID`, `REPORT_OWNER_ROLE`).

mod config;

use analysis_core::{AnalysisResult, FinancialReportCreate, InMemoryReportStore};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::LoaderConfig;
use fundamental_analysis::FinancialAnalysisEngine;
use report_comparison::ReportComparator;
use serde::Serialize;
use statement_parser::{report_from_line_items, HeuristicExtractor, LineItemSource, LineItems};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "statement-loader", about = "Financial statement analysis from spreadsheet uploads")]
struct Cli {
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one workbook and run the full analysis
    Analyze {
        file: PathBuf,
        #[arg(long)]
        organization: Option<String>,
        #[arg(long)]
        period: Option<String>,
    },
    /// Compare a base-period workbook against a current-period workbook
    Compare {
        base: PathBuf,
        current: PathBuf,
        #[arg(long)]
        organization: Option<String>,
        /// Defaults to the base file name without extension
        #[arg(long)]
        base_period: Option<String>,
        /// Defaults to the current file name without extension
        #[arg(long)]
        current_period: Option<String>,
    },
}

#[derive(Serialize)]
struct AnalyzeOutput {
    line_items: LineItems,
    analysis: AnalysisResult,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // Parse arguments first so --help works whatever the environment holds
    let cli = Cli::parse();
    let config = LoaderConfig::from_env()?;
    init_tracing(config.json_logging);

    let extractor = HeuristicExtractor::new();
    let store = InMemoryReportStore::new();
    let caller = config.caller();

    let output = match cli.command {
        Command::Analyze { file, organization, period } => {
            let organization = organization.unwrap_or_else(|| config.organization_name.clone());
            let period = period.unwrap_or_else(|| config.period.clone());

            let (line_items, upload) = load_upload(&extractor, &file, organization, period).await?;
            let id = store.insert(upload, config.owner_id).await;

            let analysis = FinancialAnalysisEngine::new()
                .analyze_by_id(&store, &caller, id)
                .await?;
            serde_json::to_value(AnalyzeOutput { line_items, analysis })?
        }
        Command::Compare { base, current, organization, base_period, current_period } => {
            let organization = organization.unwrap_or_else(|| config.organization_name.clone());
            let base_period = base_period.unwrap_or_else(|| period_from_path(&base, &config.period));
            let current_period =
                current_period.unwrap_or_else(|| period_from_path(&current, &config.period));

            let (_, base_upload) =
                load_upload(&extractor, &base, organization.clone(), base_period).await?;
            let (_, current_upload) =
                load_upload(&extractor, &current, organization, current_period).await?;
            let base_id = store.insert(base_upload, config.owner_id).await;
            let current_id = store.insert(current_upload, config.owner_id).await;

            let comparison = ReportComparator::new()
                .compare_by_id(&store, &caller, base_id, current_id)
                .await?;
            serde_json::to_value(comparison)?
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

fn init_tracing(json_logging: bool) {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "statement_loader=info,statement_parser=info".into())
    };

    // Logs go to stderr so stdout stays valid JSON
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn load_upload(
    extractor: &dyn LineItemSource,
    path: &Path,
    organization: String,
    period: String,
) -> Result<(LineItems, FinancialReportCreate)> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let line_items = extractor
        .extract(&bytes)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("{}: recovered {} line items", path.display(), line_items.len());

    let upload = report_from_line_items(&line_items, organization, period)?;
    Ok((line_items, upload))
}

fn period_from_path(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
