//! The result of genotyping one haplotype block, as handed over
//! by the (external) likelihood computation.
use super::ReadStrandCount;

/// One variant site in a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    /// Identifier of the site.
    pub id: u32,
    /// The order of the first variant node of the site in the graph.
    pub first_variant_node: u32,
    /// The number of alleles, reference included.
    pub num: u16,
}

impl Genotype {
    pub fn new(id: u32, first_variant_node: u32, num: u16) -> Self {
        Self {
            id,
            first_variant_node,
            num,
        }
    }
}

/// Statistics of one site. `read_strand[j]` is the tally of the j-th sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarStats {
    pub read_strand: Vec<ReadStrandCount>,
}

/// A genotyped sample in a block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HapSample {
    /// Combination identifiers this sample was called with.
    pub calls: Vec<u16>,
    /// Impurity of each combination slot. The length is
    /// the number of combinations of the block.
    pub impurity: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenotypedBlock {
    pub gts: Vec<Genotype>,
    pub var_stats: Vec<VarStats>,
    pub hap_samples: Vec<HapSample>,
}

impl GenotypedBlock {
    /// The number of possible joint allele assignments in this block.
    pub fn num_combinations(&self) -> usize {
        self.gts.iter().map(|gt| gt.num as usize).product()
    }
    /// Return the combinations called in this block. The reference combination (0)
    /// is always the first element. `impurity` is overwritten with the sum of the
    /// impurity rows of all samples.
    pub fn get_haplotype_calls(&self, impurity: &mut Vec<u64>) -> Vec<u16> {
        let slots = self.num_combinations();
        impurity.clear();
        impurity.resize(slots, 0);
        let mut calls = vec![0];
        for sample in self.hap_samples.iter() {
            assert_eq!(sample.impurity.len(), slots);
            impurity
                .iter_mut()
                .zip(sample.impurity.iter())
                .for_each(|(x, y)| *x += y);
            calls.extend(sample.calls.iter().filter(|&&c| c != 0));
        }
        calls
    }
}
