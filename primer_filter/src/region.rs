//! Genomic intervals.
use super::error::{Error, Result};
use super::index::AbsolutePosition;

/// A half-open, 0-based interval on a chromosome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomicRegion {
    pub chrom: String,
    pub begin: u32,
    pub end: u32,
}

impl std::fmt::Display for GenomicRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.begin, self.end)
    }
}

impl GenomicRegion {
    pub fn new(chrom: &str, begin: u32, end: u32) -> Self {
        Self {
            chrom: chrom.to_string(),
            begin,
            end,
        }
    }
    /// Parse `[chrom, begin, end, ..]`. `line` is only used for error reporting.
    pub fn from_fields(fields: &[&str], line: usize) -> Result<Self> {
        if fields.len() < 3 {
            return Err(Error::TooFewFields {
                line,
                expected: 3,
                found: fields.len(),
            });
        }
        let parse = |field: &str| {
            field.trim().parse::<u32>().map_err(|_| Error::BadCoordinate {
                line,
                field: field.to_string(),
            })
        };
        let begin = parse(fields[1])?;
        let end = parse(fields[2])?;
        Ok(Self::new(fields[0], begin, end))
    }
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.begin)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn get_absolute_begin_position<A: AbsolutePosition + ?Sized>(
        &self,
        abs: &A,
    ) -> Result<u32> {
        abs.absolute_position(&self.chrom, self.begin)
            .ok_or_else(|| Error::UnknownChromosome(self.chrom.clone()))
    }
    pub fn get_absolute_end_position<A: AbsolutePosition + ?Sized>(
        &self,
        abs: &A,
    ) -> Result<u32> {
        abs.absolute_position(&self.chrom, self.end)
            .ok_or_else(|| Error::UnknownChromosome(self.chrom.clone()))
    }
}
