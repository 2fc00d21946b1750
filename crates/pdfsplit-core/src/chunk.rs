//! Chunk planning
//!
//! A chunk is a contiguous half-open range of 0-based page indices destined
//! for one output file. Planning is an estimate only; the split loop shrinks
//! chunks that serialize over the limit.

/// Contiguous half-open page range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "chunk must contain at least one page");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// 1-based lopdf page numbers covered by this chunk.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        (self.start..self.end).map(|i| i as u32 + 1)
    }

    /// Split at the midpoint into two non-empty halves covering the same
    /// range. Requires at least two pages.
    pub fn halve(self) -> (Chunk, Chunk) {
        debug_assert!(self.len() >= 2, "cannot halve a single-page chunk");
        let mid = self.start + self.len() / 2;
        (Chunk::new(self.start, mid), Chunk::new(mid, self.end))
    }
}

/// Estimate how many pages fit in `max_bytes`, assuming uniform page cost.
///
/// Integer form of `max_bytes / (file_size / page_count)`, floored, with a
/// one-page minimum. Real per-page cost is non-uniform (shared fonts and
/// images), so callers must treat the result as a starting guess.
pub fn estimate_pages_per_chunk(file_size: u64, page_count: usize, max_bytes: u64) -> usize {
    let estimate = max_bytes.saturating_mul(page_count as u64) / file_size.max(1);
    (estimate as usize).max(1)
}

/// Partition `[0, page_count)` into successive chunks of `pages_per_chunk`
/// pages; the last chunk may be shorter.
pub fn plan_chunks(page_count: usize, pages_per_chunk: usize) -> Vec<Chunk> {
    assert!(pages_per_chunk > 0);
    let mut chunks = Vec::new();
    let mut cursor = 0;
    while cursor < page_count {
        let end = (cursor + pages_per_chunk).min(page_count);
        chunks.push(Chunk::new(cursor, end));
        cursor = end;
    }
    chunks
}
