//! Errors raised while loading primers.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
    /// Line numbers are 1-based.
    #[error("expected at least {expected} fields in primer BEDPE at line {line}, got {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid coordinate '{field}' in primer BEDPE at line {line}")]
    BadCoordinate { line: usize, field: String },
    #[error("malformed FASTA index line {line}")]
    BadIndexLine { line: usize },
    #[error("the reference is longer than {} bases", u32::MAX)]
    ReferenceTooLong,
    #[error("chromosome {0} is not in the graph")]
    UnknownChromosome(String),
}
