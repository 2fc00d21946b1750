//! Input discovery
//!
//! Expands the positional argument into a list of PDF paths: an existing
//! file is taken as-is, an existing directory contributes its direct
//! `*.pdf` entries, anything else is treated as a glob pattern.

use pdfsplit_core::SplitError;
use std::fs;
use std::path::{Path, PathBuf};

/// True for `.pdf` paths (case-insensitive), excluding Windows
/// zone-identifier artifacts (`*.Identifier`).
fn is_pdf(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.ends_with(".Identifier") {
            return false;
        }
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Expand `input` into a sorted list of PDF files to process.
///
/// The list may be empty (nothing matched); callers decide whether that is
/// an error. Non-PDF matches are silently dropped.
pub fn discover_inputs(input: &str) -> Result<Vec<PathBuf>, SplitError> {
    let path = Path::new(input);

    let mut files: Vec<PathBuf> = if path.is_file() {
        if is_pdf(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        }
    } else if path.is_dir() {
        let entries = fs::read_dir(path).map_err(|e| {
            SplitError::InvalidArgument(format!("Cannot read directory {}: {}", path.display(), e))
        })?;
        entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_pdf(p))
            .collect()
    } else {
        let paths = glob::glob(input).map_err(|e| {
            SplitError::InvalidArgument(format!("Invalid glob pattern {:?}: {}", input, e))
        })?;
        paths
            .filter_map(Result::ok)
            .filter(|p| p.is_file() && is_pdf(p))
            .collect()
    };

    files.sort();
    Ok(files)
}
