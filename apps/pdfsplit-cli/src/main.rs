//! pdfsplit binary
//!
//! Splits PDF files larger than a size threshold into smaller parts.

use clap::Parser;
use pdfsplit_cli::{discover_inputs, run, RunConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Binary megabytes, matching the documented --max-size unit.
const BYTES_PER_MB: f64 = 1_048_576.0;

#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(
    version,
    about = "Split PDF files larger than a size threshold into smaller parts"
)]
struct Args {
    /// PDF file, directory, or glob pattern to process
    input: String,

    /// Maximum part size in megabytes (1 MB = 1,048,576 bytes)
    #[arg(long, default_value = "4.0")]
    max_size: f64,

    /// Write parts here instead of next to each source file
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print a JSON report to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --json output on stdout stays clean.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.max_size <= 0.0 {
        eprintln!("Error: maximum size must be greater than 0");
        std::process::exit(1);
    }
    let max_bytes = (args.max_size * BYTES_PER_MB).round() as u64;

    let files = match discover_inputs(&args.input) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    if files.is_empty() {
        eprintln!("No PDF files found!");
        std::process::exit(1);
    }
    tracing::info!("Found {} PDF file(s) to process", files.len());

    let summary = run(
        &files,
        &RunConfig {
            max_bytes,
            out_dir: args.out_dir,
        },
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.reports)?);
    }

    let split_count = summary
        .reports
        .iter()
        .filter(|r| r.outcome == "split")
        .count();
    tracing::info!(
        "Processing complete: split {} file(s), {} failure(s)",
        split_count,
        summary.failures
    );

    if summary.failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
