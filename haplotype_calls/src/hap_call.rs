//! Haplotype calls of a block and their merge.
use super::block::{Genotype, GenotypedBlock};
use super::ReadStrandCount;
use rayon::prelude::*;

/// The genotyping result of one haplotype block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaplotypeCall {
    /// Called combination identifiers. `calls[0]` is the reference combination
    /// until `make_calls_unique` is called.
    pub calls: Vec<u16>,
    /// Impurity of each combination slot. The length never changes.
    pub haplotype_impurity: Vec<u64>,
    pub num_samples: u32,
    pub gts: Vec<Genotype>,
    /// Parallel to `gts`. `read_strand[i][j]` is the tally of the j-th sample at the i-th site.
    pub read_strand: Vec<Vec<ReadStrandCount>>,
}

impl std::fmt::Display for HaplotypeCall {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let calls: Vec<_> = self.calls.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{} sites\t{} samples\tcalls:[{}]",
            self.gts.len(),
            self.num_samples,
            calls.join(",")
        )
    }
}

impl HaplotypeCall {
    pub fn new(hap: &GenotypedBlock) -> Self {
        assert_eq!(hap.var_stats.len(), hap.gts.len());
        let mut haplotype_impurity = vec![];
        let calls = hap.get_haplotype_calls(&mut haplotype_impurity);
        let read_strand = hap
            .var_stats
            .iter()
            .map(|stat| stat.read_strand.clone())
            .collect();
        Self {
            calls,
            haplotype_impurity,
            num_samples: hap.hap_samples.len() as u32,
            gts: hap.gts.clone(),
            read_strand,
        }
    }
    /// Merge `other` into `self`. `other.calls` should start with the reference
    /// combination, and both calls should cover the same combination slots and sites.
    /// Panics otherwise.
    pub fn merge_with(&mut self, other: &HaplotypeCall) {
        assert!(!other.calls.is_empty());
        assert_eq!(other.calls[0], 0);
        self.calls.extend_from_slice(&other.calls[1..]);
        self.num_samples += other.num_samples;
        assert_eq!(self.haplotype_impurity.len(), other.haplotype_impurity.len());
        self.haplotype_impurity
            .iter_mut()
            .zip(other.haplotype_impurity.iter())
            .for_each(|(x, y)| *x += y);
        assert_eq!(self.read_strand.len(), other.read_strand.len());
        for (rs, other_rs) in self.read_strand.iter_mut().zip(other.read_strand.iter()) {
            assert_eq!(rs.len(), other_rs.len());
            rs.iter_mut()
                .zip(other_rs.iter())
                .for_each(|(x, y)| x.merge_with(y));
        }
    }
    /// Sort the calls and remove duplicates. Call this only after all merges are done.
    pub fn make_calls_unique(&mut self) {
        self.calls.sort_unstable();
        self.calls.dedup();
    }
}

/// Haplotype calls of consecutive blocks, in genomic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaplotypeCalls {
    hap_calls: Vec<HaplotypeCall>,
}

impl HaplotypeCalls {
    pub fn new(hap_calls: Vec<HaplotypeCall>) -> Self {
        Self { hap_calls }
    }
    /// Construct calls from genotyped blocks. The order of `blocks` is kept.
    pub fn from_blocks(blocks: &[GenotypedBlock]) -> Self {
        let hap_calls = blocks.par_iter().map(HaplotypeCall::new).collect();
        Self { hap_calls }
    }
    /// Merge `other` block by block. Both should have the same number of blocks.
    pub fn merge_with(&mut self, other: &HaplotypeCalls) {
        assert_eq!(self.len(), other.len());
        self.hap_calls
            .iter_mut()
            .zip(other.hap_calls.iter())
            .for_each(|(x, y)| x.merge_with(y));
    }
    pub fn make_calls_unique(&mut self) {
        self.hap_calls
            .iter_mut()
            .for_each(|call| call.make_calls_unique());
    }
    pub fn into_inner(self) -> Vec<HaplotypeCall> {
        self.hap_calls
    }
    pub fn iter(&self) -> std::slice::Iter<'_, HaplotypeCall> {
        self.hap_calls.iter()
    }
    pub fn len(&self) -> usize {
        self.hap_calls.len()
    }
    pub fn is_empty(&self) -> bool {
        self.hap_calls.is_empty()
    }
}

impl std::ops::Index<usize> for HaplotypeCalls {
    type Output = HaplotypeCall;
    fn index(&self, index: usize) -> &Self::Output {
        self.hap_calls.index(index)
    }
}

impl std::iter::FromIterator<HaplotypeCall> for HaplotypeCalls {
    fn from_iter<I: IntoIterator<Item = HaplotypeCall>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
