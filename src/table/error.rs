// Sat Oct 17 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Unsupported column type: {0}")]
    UnsupportedColumnType(String),
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Table has no columns")]
    NoColumns,
    #[error("Unsupported address width: {0} bytes")]
    UnsupportedAddressWidth(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
