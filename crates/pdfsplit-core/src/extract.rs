//! Page extraction
//!
//! Materializes one chunk of a source document as a standalone PDF by
//! deleting every page outside the chunk and pruning orphaned objects.

use crate::chunk::Chunk;
use crate::error::SplitError;
use lopdf::Document;
use std::collections::HashSet;

/// Serialize the pages of `chunk` into a standalone PDF.
///
/// The source document is cloned; pages outside the chunk are deleted in
/// reverse order so page numbering stays valid while deleting, then
/// orphaned objects are pruned and streams compressed before serializing.
pub fn extract_pages(doc: &Document, chunk: Chunk) -> Result<Vec<u8>, SplitError> {
    let page_count = doc.get_pages().len() as u32;

    let mut part = doc.clone();

    // Delete every 1-based page number outside the chunk, back to front.
    let pages_to_keep: HashSet<u32> = chunk.page_numbers().collect();
    let mut pages_to_delete: Vec<u32> = (1..=page_count)
        .filter(|p| !pages_to_keep.contains(p))
        .collect();
    pages_to_delete.reverse();
    for page_num in pages_to_delete {
        part.delete_pages(&[page_num]);
    }

    part.prune_objects();
    part.compress();

    let mut buffer = Vec::new();
    part.save_to(&mut buffer)
        .map_err(|e| SplitError::SerializeFailure(e.to_string()))?;

    Ok(buffer)
}
