//! Split pipeline
//!
//! Size gate, pages-per-chunk estimate, an initial chunk plan, then a
//! materialize/measure loop that halves any chunk serializing over the
//! byte limit and re-queues both halves. Halving is monotonic and floors
//! at one page, so each start position settles within O(log
//! pages_per_chunk) attempts; a single page over the limit is written
//! anyway (the limit is advisory, not a hard contract).

use crate::chunk::{estimate_pages_per_chunk, plan_chunks, Chunk};
use crate::error::SplitError;
use crate::extract::extract_pages;
use lopdf::Document;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// One chunk written to disk.
#[derive(Debug, Clone)]
pub struct PartFile {
    pub path: PathBuf,
    pub pages: Chunk,
    pub size_bytes: u64,
}

/// Result of splitting one source file.
#[derive(Debug)]
pub enum SplitOutcome {
    /// Source was already at or under the limit; nothing was written.
    Unsplit { path: PathBuf, size_bytes: u64 },
    /// Source was split into the given parts, in page order.
    Split {
        input_size_bytes: u64,
        page_count: usize,
        parts: Vec<PartFile>,
    },
}

/// Split `input` into parts of at most `max_bytes` each, best effort.
///
/// Parts are named `<stem>_part<N>.pdf` (N starting at 1) and written to
/// `out_dir`, or next to the source when `out_dir` is `None`. Oversized
/// candidates are measured in memory and never touch disk; only accepted
/// chunks are written, so parts already on disk when an error occurs are
/// all valid. The source file is never modified.
pub fn split_file(
    input: &Path,
    max_bytes: u64,
    out_dir: Option<&Path>,
) -> Result<SplitOutcome, SplitError> {
    if max_bytes == 0 {
        return Err(SplitError::InvalidArgument(
            "max size must be greater than 0".into(),
        ));
    }

    let file_size = fs::metadata(input)
        .map_err(|e| SplitError::UnreadableSource(format!("{}: {}", input.display(), e)))?
        .len();

    if file_size <= max_bytes {
        return Ok(SplitOutcome::Unsplit {
            path: input.to_path_buf(),
            size_bytes: file_size,
        });
    }

    let doc = Document::load(input)
        .map_err(|e| SplitError::UnreadableSource(format!("{}: {}", input.display(), e)))?;
    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(SplitError::EmptyDocument);
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
    };

    let pages_per_chunk = estimate_pages_per_chunk(file_size, page_count, max_bytes);
    let mut pending: VecDeque<Chunk> = plan_chunks(page_count, pages_per_chunk).into();
    let mut parts = Vec::new();

    while let Some(chunk) = pending.pop_front() {
        let bytes = extract_pages(&doc, chunk)?;

        if bytes.len() as u64 > max_bytes && chunk.len() > 1 {
            // Over the limit with room to shrink: halve the chunk and
            // re-queue both halves; the tail half may halve again.
            let (head, tail) = chunk.halve();
            pending.push_front(tail);
            pending.push_front(head);
            continue;
        }

        let path = dir.join(format!("{}_part{}.pdf", stem, parts.len() + 1));
        fs::write(&path, &bytes).map_err(|source| SplitError::WriteFailure {
            path: path.clone(),
            source,
        })?;

        parts.push(PartFile {
            path,
            pages: chunk,
            size_bytes: bytes.len() as u64,
        });
    }

    Ok(SplitOutcome::Split {
        input_size_bytes: file_size,
        page_count,
        parts,
    })
}
