//! Alignment paths of a read through the graph.

/// The read was reverse-complemented, as in the SAM flag.
pub const IS_SEQ_REVERSED: u16 = 0x10;

/// A path of a read. `var_order[i]` is a variant supported by the read,
/// and `nums[i]` is the bitset of the alleles of that variant the read supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenotypePath {
    pub var_order: Vec<u32>,
    pub nums: Vec<u64>,
    /// Start of the path in the local coordinate of the graph.
    pub start: u32,
    /// End of the path, inclusive.
    pub end: u32,
}

impl GenotypePath {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }
    /// Record that the read supports the alleles `num` of the variant `var_order`.
    pub fn add_support(&mut self, var_order: u32, num: u64) {
        self.var_order.push(var_order);
        self.nums.push(num);
    }
    /// Remove the i-th supported variant.
    pub fn erase_ref_support(&mut self, i: usize) {
        debug_assert_eq!(self.var_order.len(), self.nums.len());
        self.var_order.remove(i);
        self.nums.remove(i);
    }
    /// Remove every supported variant which `is_removed` returns true.
    /// Indices are visited from the last to the first.
    /// Return the number of removed variants.
    pub fn erase_ref_support_if<F: Fn(u32) -> bool>(&mut self, is_removed: F) -> usize {
        let removed: Vec<usize> = (0..self.var_order.len())
            .rev()
            .filter(|&i| is_removed(self.var_order[i]))
            .collect();
        for &i in removed.iter() {
            self.erase_ref_support(i);
        }
        removed.len()
    }
}

/// All paths of one read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenotypePaths {
    pub paths: Vec<GenotypePath>,
    pub flags: u16,
}

impl GenotypePaths {
    pub fn new(paths: Vec<GenotypePath>, flags: u16) -> Self {
        Self { paths, flags }
    }
    pub fn is_reversed(&self) -> bool {
        self.flags & IS_SEQ_REVERSED != 0
    }
    /// The number of supported variants over all paths.
    pub fn num_var_orders(&self) -> usize {
        self.paths.iter().map(|p| p.var_order.len()).sum()
    }
}
