// Wed Feb 4 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
