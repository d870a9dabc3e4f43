use thiserror::Error;

/// Errors raised at the I/O edges of the crate.
///
/// Retrieval itself never fails: a query with no confident match is a
/// normal `None` result, not an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_cbor::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
