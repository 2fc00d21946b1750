//! Machine-readable run summaries, one per input file.

use crate::split::{PartFile, SplitOutcome};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: String,
    pub success: bool,
    /// "unsplit", "split", or "error"
    pub outcome: String,
    pub input_size_bytes: Option<u64>,
    /// Source page count. `None` when the document was never parsed: a
    /// no-op returns on the size gate alone, and errors may precede parsing.
    pub page_count: Option<usize>,
    pub parts: Vec<PartInfo>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartInfo {
    pub path: String,
    /// 1-based inclusive page range of the source covered by this part.
    pub first_page: usize,
    pub last_page: usize,
    pub size_bytes: u64,
}

impl SplitReport {
    pub fn from_outcome(input: &Path, outcome: &SplitOutcome) -> Self {
        match outcome {
            SplitOutcome::Unsplit { size_bytes, .. } => Self {
                input: input.display().to_string(),
                success: true,
                outcome: "unsplit".into(),
                input_size_bytes: Some(*size_bytes),
                page_count: None,
                parts: Vec::new(),
                error: None,
            },
            SplitOutcome::Split {
                input_size_bytes,
                page_count,
                parts,
            } => Self {
                input: input.display().to_string(),
                success: true,
                outcome: "split".into(),
                input_size_bytes: Some(*input_size_bytes),
                page_count: Some(*page_count),
                parts: parts.iter().map(PartInfo::from_part).collect(),
                error: None,
            },
        }
    }

    pub fn from_error(input: &Path, error: &crate::SplitError) -> Self {
        Self {
            input: input.display().to_string(),
            success: false,
            outcome: "error".into(),
            input_size_bytes: None,
            page_count: None,
            parts: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

impl PartInfo {
    fn from_part(part: &PartFile) -> Self {
        Self {
            path: part.path.display().to_string(),
            first_page: part.pages.start + 1,
            last_page: part.pages.end,
            size_bytes: part.size_bytes,
        }
    }
}
