//! Queries against the position index of an already built graph.
use super::error::{Error, Result};
use super::path::GenotypePath;
use std::collections::HashMap;
use std::path::Path;

/// A position in the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub node_order: u32,
    pub offset: u32,
}

impl Location {
    pub fn new(node_order: u32, offset: u32) -> Self {
        Self { node_order, offset }
    }
    /// The absolute position of this location.
    pub fn position(&self) -> u32 {
        self.node_order + self.offset
    }
}

/// Conversion from a chromosome coordinate to the absolute coordinate of the graph.
pub trait AbsolutePosition {
    /// Return `None` if `chrom` is not a part of the graph
    /// or the position is out of the absolute coordinate.
    fn absolute_position(&self, chrom: &str, pos: u32) -> Option<u32>;
}

pub trait PositionIndex: AbsolutePosition {
    /// Resolve a graph-local coordinate of `path` into the locations it touches.
    fn locations_of_position(&self, pos: u32, path: &GenotypePath) -> Vec<Location>;
    /// Variant orders of every variant whose region intersects `[begin, end]`.
    fn variant_orders_in_range(&self, begin: u32, end: u32) -> Vec<u32>;
}

/// Chromosomes laid out one after another. The first one starts at zero.
#[derive(Debug, Clone, Default)]
pub struct ChromosomeOffsets {
    names: Vec<String>,
    offsets: HashMap<String, u32>,
    total: u32,
}

impl ChromosomeOffsets {
    /// Lay out chromosomes in the given order. The total length should fit in u32.
    pub fn from_lengths<S: Into<String>>(lengths: Vec<(S, u32)>) -> Result<Self> {
        let mut res = Self::default();
        for (name, len) in lengths {
            let name = name.into();
            res.offsets.insert(name.clone(), res.total);
            res.names.push(name);
            res.total = res.total.checked_add(len).ok_or(Error::ReferenceTooLong)?;
        }
        Ok(res)
    }
    /// Read a FASTA index (.fai). Only the first two columns are used.
    pub fn from_fai<P: AsRef<Path>>(file: P) -> Result<Self> {
        let path = file.as_ref();
        let fai = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lengths = fai
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                let mut fields = line.split('\t');
                let name = fields.next();
                let len = fields.next().and_then(|len| len.parse::<u32>().ok());
                match (name, len) {
                    (Some(name), Some(len)) => Ok((name.to_string(), len)),
                    _ => Err(Error::BadIndexLine { line: idx + 1 }),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("Read {} chromosomes from {}", lengths.len(), path.display());
        Self::from_lengths(lengths)
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    /// Total length of all chromosomes.
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl AbsolutePosition for ChromosomeOffsets {
    fn absolute_position(&self, chrom: &str, pos: u32) -> Option<u32> {
        self.offsets
            .get(chrom)
            .and_then(|offset| offset.checked_add(pos))
    }
}
