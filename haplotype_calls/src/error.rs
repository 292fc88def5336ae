//! Errors raised while persisting haplotype calls.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The call file could not be opened or created.
    #[error("could not open haplotype calls file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
    #[error("could not encode haplotype calls: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("could not decode haplotype calls: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("unexpected bytes after the haplotype calls")]
    TrailingBytes,
    #[error("{} has {found} blocks, expected {expected}", .path.display())]
    BlockCountMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("not a haplotype calls file")]
    BadMagic,
    #[error("unsupported haplotype calls format version {0}")]
    UnsupportedVersion(u32),
}
