use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to read PDF: {0}")]
    UnreadableSource(String),

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize chunk: {0}")]
    SerializeFailure(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
