//! PDF size-splitting
//!
//! This crate splits an oversized PDF into parts that each stay at or
//! under a byte threshold, by redistributing contiguous page ranges
//! across output files. Page extraction uses lopdf.
//!
//! The threshold is best effort: a single page that alone serializes over
//! the limit is emitted anyway, since a page is the atomic unit of
//! splitting.

pub mod chunk;
pub mod error;
pub mod extract;
pub mod report;
pub mod split;

pub use chunk::{estimate_pages_per_chunk, plan_chunks, Chunk};
pub use error::SplitError;
pub use extract::extract_pages;
pub use report::{PartInfo, SplitReport};
pub use split::{split_file, PartFile, SplitOutcome};

/// Parse PDF bytes and return page count
pub fn get_page_count(bytes: &[u8]) -> Result<usize, SplitError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| SplitError::UnreadableSource(e.to_string()))?;
    Ok(doc.get_pages().len())
}

#[cfg(test)]
pub(crate) mod testpdf {
    use lopdf::content::{Content, Operation};
    use lopdf::{Dictionary, Document, Object, Stream, StringFormat};

    // xorshift noise so per-page padding survives stream compression and
    // byte-size thresholds in tests stay meaningful.
    fn noise(len: usize, mut seed: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(len + 8);
        while out.len() < len {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            out.extend_from_slice(&seed.to_le_bytes());
        }
        out.truncate(len);
        out
    }

    /// Build an in-memory PDF with `num_pages` pages. Each page carries a
    /// "Page N" text marker plus `padding` bytes of deterministic noise.
    pub(crate) fn build_test_pdf(num_pages: usize, padding: usize) -> Vec<u8> {
        build_test_pdf_varied(&vec![padding; num_pages])
    }

    /// Like `build_test_pdf` but with one padding size per page, for
    /// documents with non-uniform page cost.
    pub(crate) fn build_test_pdf_varied(paddings: &[usize]) -> Vec<u8> {
        let num_pages = paddings.len();
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut page_ids = Vec::new();

        for (i, &padding) in paddings.iter().enumerate() {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                ),
                Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("Page {}", i + 1).into_bytes(),
                        StringFormat::Literal,
                    )],
                ),
            ];
            if padding > 0 {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(
                        noise(padding, i as u64 + 1),
                        StringFormat::Hexadecimal,
                    )],
                ));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(num_pages as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }
}
