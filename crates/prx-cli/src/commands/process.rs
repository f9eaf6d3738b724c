//! Process command - extract a record from a single file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use prx_core::ParsedRecord;

use super::{extract_file, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,

    /// Disable stock/unit column realignment
    #[arg(long)]
    no_realign: bool,

    /// Disable trailing-quantity recovery
    #[arg(long)]
    no_trailing_qty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.no_realign {
        config.parse.realign_columns = false;
    }
    if args.no_trailing_qty {
        config.parse.recover_trailing_quantity = false;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let outcome = extract_file(&args.input, &config)?;

    if args.show_warnings && !outcome.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &outcome.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_record(&outcome.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_record(record: &ParsedRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => format_text(record),
    }
}

pub fn csv_header() -> [&'static str; 8] {
    [
        "pr_no",
        "request_date",
        "fund_cluster",
        "responsibility_center_code",
        "requested_by",
        "approved_by",
        "item_count",
        "total_cost",
    ]
}

pub fn csv_row(record: &ParsedRecord) -> [String; 8] {
    [
        record.pr_no.clone().unwrap_or_default(),
        record.request_date.clone().unwrap_or_default(),
        record.fund_cluster.clone().unwrap_or_default(),
        record.responsibility_center_code.clone().unwrap_or_default(),
        record.requested_by.clone().unwrap_or_default(),
        record.approved_by.clone().unwrap_or_default(),
        record.items.len().to_string(),
        record
            .total_cost
            .map(|t| format!("{:.2}", t))
            .unwrap_or_default(),
    ]
}

fn format_csv(record: &ParsedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(csv_header())?;
    wtr.write_record(csv_row(record))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ParsedRecord) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "PR No.: {}\n",
        record.pr_no.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Date: {}\n",
        record.request_date.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Fund Cluster: {}\n",
        record.fund_cluster.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Responsibility Center: {}\n",
        record.responsibility_center_code.as_deref().unwrap_or("-")
    ));
    output.push('\n');

    output.push_str("Items:\n");
    if record.items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in &record.items {
        output.push_str(&format!(
            "  {} {} {} x{} @ {} = {}\n",
            item.stock_property_no.as_deref().unwrap_or("-"),
            item.unit.as_deref().unwrap_or("-"),
            item.item_description.as_deref().unwrap_or("-"),
            item.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string()),
            item.unit_cost
                .map(|c| format!("{:.2}", c))
                .unwrap_or_else(|| "-".to_string()),
            item.total_cost
                .map(|c| format!("{:.2}", c))
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Requested by: {} ({})\n",
        record.requested_by.as_deref().unwrap_or("-"),
        record.designation1.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Approved by: {} ({})\n",
        record.approved_by.as_deref().unwrap_or("-"),
        record.designation2.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Total Cost: {}\n",
        record
            .total_cost
            .map(|t| format!("{:.2}", t))
            .unwrap_or_else(|| "-".to_string())
    ));

    Ok(output)
}
