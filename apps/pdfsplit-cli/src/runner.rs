//! Per-file orchestration
//!
//! Each input is processed independently and sequentially; a failure on
//! one file is reported and does not stop the others. Parts already
//! written before a failure stay on disk.

use pdfsplit_core::{split_file, SplitOutcome, SplitReport};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub max_bytes: u64,
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<SplitReport>,
    pub failures: usize,
}

/// Split every file in `files`, logging outcomes as they happen.
pub fn run(files: &[PathBuf], config: &RunConfig) -> RunSummary {
    let mut reports = Vec::with_capacity(files.len());
    let mut failures = 0;

    for file in files {
        match split_file(file, config.max_bytes, config.out_dir.as_deref()) {
            Ok(outcome) => {
                log_outcome(file, &outcome);
                reports.push(SplitReport::from_outcome(file, &outcome));
            }
            Err(err) => {
                tracing::error!("Failed to process {}: {}", file.display(), err);
                failures += 1;
                reports.push(SplitReport::from_error(file, &err));
            }
        }
    }

    RunSummary { reports, failures }
}

fn log_outcome(file: &Path, outcome: &SplitOutcome) {
    match outcome {
        SplitOutcome::Unsplit { size_bytes, .. } => {
            tracing::info!(
                "{} is already under the limit ({} bytes), left as-is",
                file.display(),
                size_bytes
            );
        }
        SplitOutcome::Split { parts, .. } => {
            tracing::info!("Split {} into {} part(s)", file.display(), parts.len());
            for part in parts {
                tracing::info!(
                    "  Created {} (pages {}-{}, {} bytes)",
                    part.path.display(),
                    part.pages.start + 1,
                    part.pages.end,
                    part.size_bytes
                );
            }
        }
    }
}
