//! Batch command - extract records from multiple files.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use super::process::{csv_header, csv_row};
use super::{extract_file, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input files, e.g. "scans/*.pdf"
    #[arg(required = true)]
    pattern: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "jsonl")]
    format: BatchFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BatchFormat {
    /// One JSON record per line
    Jsonl,
    /// One CSV row per record
    Csv,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let inputs: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if inputs.is_empty() {
        anyhow::bail!("No files matched pattern: {}", args.pattern);
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut lines = Vec::new();
    let mut csv_wtr = csv::Writer::from_writer(vec![]);
    if matches!(args.format, BatchFormat::Csv) {
        csv_wtr.write_record(csv_header())?;
    }

    let mut failed = 0usize;
    for input in &inputs {
        pb.set_message(input.display().to_string());

        match extract_file(input, &config) {
            Ok(outcome) => match args.format {
                BatchFormat::Jsonl => {
                    lines.push(serde_json::to_string(&outcome.record)?);
                }
                BatchFormat::Csv => {
                    csv_wtr.write_record(csv_row(&outcome.record))?;
                }
            },
            Err(e) => {
                warn!("skipping {}: {}", input.display(), e);
                failed += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let output = match args.format {
        BatchFormat::Jsonl => {
            let mut joined = lines.join("\n");
            if !joined.is_empty() {
                joined.push('\n');
            }
            joined
        }
        BatchFormat::Csv => String::from_utf8(csv_wtr.into_inner()?)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} record(s) written to {}",
            style("✓").green(),
            inputs.len() - failed,
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    if failed > 0 {
        eprintln!(
            "{} {} file(s) could not be processed",
            style("!").yellow(),
            failed
        );
    }

    Ok(())
}
