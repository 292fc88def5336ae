//! Primer regions and the filter removing variant evidence inside them.
use super::config::{Config, DEFAULT_CONFIG};
use super::error::{Error, Result};
use super::index::{AbsolutePosition, PositionIndex};
use super::path::{GenotypePath, GenotypePaths};
use super::region::GenomicRegion;
use rayon::prelude::*;
use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Primer pairs. `left[i]` and `right[i]` flank the same amplicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Primers {
    left: Vec<GenomicRegion>,
    right: Vec<GenomicRegion>,
}

impl std::fmt::Display for Primers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            writeln!(f, "{}\t{}", l, r)?;
        }
        Ok(())
    }
}

impl Primers {
    pub fn new(left: Vec<GenomicRegion>, right: Vec<GenomicRegion>) -> Self {
        assert_eq!(left.len(), right.len());
        Self { left, right }
    }
    /// Read a primer BEDPE file. Every line should have at least 6 tab-separated fields,
    /// `chrom1 begin1 end1 chrom2 begin2 end2`. Trailing fields are ignored.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let path = file.as_ref();
        let rdr = std::fs::File::open(path).map_err(|source| {
            error!("Could not open file {}", path.display());
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_reader(BufReader::new(rdr))
    }
    pub fn from_reader<R: BufRead>(rdr: R) -> Result<Self> {
        let mut primers = Self::default();
        for (idx, line) in rdr.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 6 {
                error!(
                    "Expected at least 6 fields in Primer BEDPE, got {}",
                    fields.len()
                );
                return Err(Error::TooFewFields {
                    line: idx + 1,
                    expected: 6,
                    found: fields.len(),
                });
            }
            let left = GenomicRegion::from_fields(&fields[0..3], idx + 1)?;
            let right = GenomicRegion::from_fields(&fields[3..6], idx + 1)?;
            debug!("Got primer regions {} {}", left, right);
            primers.left.push(left);
            primers.right.push(right);
        }
        Ok(primers)
    }
    pub fn left(&self) -> &[GenomicRegion] {
        &self.left
    }
    pub fn right(&self) -> &[GenomicRegion] {
        &self.right
    }
    pub fn len(&self) -> usize {
        self.left.len()
    }
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
    /// Absolute windows of the left primers. The padding is added before the primer.
    /// The window never starts before 1.
    pub fn left_windows<A: AbsolutePosition + ?Sized>(
        &self,
        abs: &A,
        config: &Config,
    ) -> Result<Vec<Window>> {
        self.left
            .iter()
            .map(|l| {
                let begin = l.get_absolute_begin_position(abs)?;
                let end = l.get_absolute_end_position(abs)?;
                Ok(Window::new(begin.saturating_sub(config.padding).max(1), end))
            })
            .collect()
    }
    /// Absolute windows of the right primers. The padding is added after the primer.
    pub fn right_windows<A: AbsolutePosition + ?Sized>(
        &self,
        abs: &A,
        config: &Config,
    ) -> Result<Vec<Window>> {
        self.right
            .iter()
            .map(|r| {
                let begin = r.get_absolute_begin_position(abs)?;
                let end = r.get_absolute_end_position(abs)?;
                Ok(Window::new(begin, end + config.padding))
            })
            .collect()
    }
}

/// A closed interval in the absolute coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub begin: u32,
    pub end: u32,
}

impl Window {
    pub fn new(begin: u32, end: u32) -> Self {
        Self { begin, end }
    }
    pub fn contains(&self, pos: u32) -> bool {
        self.begin <= pos && pos <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

/// Remove variant evidence of reads starting (forward) or ending (reverse)
/// inside a primer.
#[derive(Debug, Clone)]
pub struct PrimerFilter<'a, G: PositionIndex> {
    graph: &'a G,
    left: Vec<Window>,
    right: Vec<Window>,
}

impl<'a, G: PositionIndex> PrimerFilter<'a, G> {
    pub fn new(primers: &Primers, graph: &'a G) -> Result<Self> {
        Self::with_config(primers, graph, &DEFAULT_CONFIG)
    }
    pub fn with_config(primers: &Primers, graph: &'a G, config: &Config) -> Result<Self> {
        let left = primers.left_windows(graph, config)?;
        let right = primers.right_windows(graph, config)?;
        debug!("{} primer pairs. {}", left.len(), config);
        Ok(Self { graph, left, right })
    }
    pub fn left_windows(&self) -> &[Window] {
        &self.left
    }
    pub fn right_windows(&self) -> &[Window] {
        &self.right
    }
    /// Filter the paths of a read. Return the number of removed variants.
    pub fn check(&self, genos: &mut GenotypePaths) -> usize {
        if genos.is_reversed() {
            self.check_right(genos)
        } else {
            self.check_left(genos)
        }
    }
    /// Remove variants of paths starting inside a left primer.
    pub fn check_left(&self, genos: &mut GenotypePaths) -> usize {
        genos
            .paths
            .iter_mut()
            .map(|path| self.check_path(path, Side::Left))
            .sum()
    }
    /// Remove variants of paths ending inside a right primer.
    pub fn check_right(&self, genos: &mut GenotypePaths) -> usize {
        genos
            .paths
            .iter_mut()
            .map(|path| self.check_path(path, Side::Right))
            .sum()
    }
    fn check_path(&self, path: &mut GenotypePath, side: Side) -> usize {
        if path.var_order.is_empty() {
            return 0;
        }
        let (pos, windows) = match side {
            Side::Left => (path.start, &self.left),
            Side::Right => (path.end, &self.right),
        };
        let locs = self.graph.locations_of_position(pos, path);
        let mut removed = 0;
        for window in windows.iter() {
            for _ in locs.iter().filter(|loc| window.contains(loc.position())) {
                let var_orders: HashSet<u32> = self
                    .graph
                    .variant_orders_in_range(window.begin, window.end)
                    .into_iter()
                    .collect();
                removed += path.erase_ref_support_if(|var_order| {
                    let hit = var_orders.contains(&var_order);
                    if hit {
                        debug!("{} Removed var_order={}", side, var_order);
                    }
                    hit
                });
            }
        }
        removed
    }
}

impl<'a, G: PositionIndex + Sync> PrimerFilter<'a, G> {
    /// Filter many reads in parallel. Return the number of removed variants.
    pub fn check_all(&self, reads: &mut [GenotypePaths]) -> usize {
        reads.par_iter_mut().map(|genos| self.check(genos)).sum()
    }
}
