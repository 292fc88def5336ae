/// Forward/reverse read tally supporting one sample at one site.
/// `r1` counts first-in-pair (or single) reads, `r2` second-in-pair reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStrandCount {
    pub r1_forward: u32,
    pub r1_reverse: u32,
    pub r2_forward: u32,
    pub r2_reverse: u32,
}

impl std::fmt::Display for ReadStrandCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.r1_forward, self.r1_reverse, self.r2_forward, self.r2_reverse
        )
    }
}

impl ReadStrandCount {
    pub fn new(r1_forward: u32, r1_reverse: u32, r2_forward: u32, r2_reverse: u32) -> Self {
        Self {
            r1_forward,
            r1_reverse,
            r2_forward,
            r2_reverse,
        }
    }
    /// Add the tallies of `other` into `self`.
    pub fn merge_with(&mut self, other: &Self) {
        self.r1_forward += other.r1_forward;
        self.r1_reverse += other.r1_reverse;
        self.r2_forward += other.r2_forward;
        self.r2_reverse += other.r2_reverse;
    }
    pub fn forward(&self) -> u32 {
        self.r1_forward + self.r2_forward
    }
    pub fn reverse(&self) -> u32 {
        self.r1_reverse + self.r2_reverse
    }
    pub fn total(&self) -> u32 {
        self.forward() + self.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn merge_adds_each_field() {
        let mut x = ReadStrandCount::new(1, 2, 3, 4);
        x.merge_with(&ReadStrandCount::new(10, 20, 30, 40));
        assert_eq!(x, ReadStrandCount::new(11, 22, 33, 44));
        assert_eq!(x.forward(), 44);
        assert_eq!(x.reverse(), 66);
        assert_eq!(x.total(), 110);
    }
    #[test]
    fn merge_order_does_not_matter() {
        let x = ReadStrandCount::new(1, 0, 2, 5);
        let y = ReadStrandCount::new(0, 3, 1, 1);
        let z = ReadStrandCount::new(7, 7, 0, 2);
        // (x + y) + z
        let mut left = x;
        left.merge_with(&y);
        left.merge_with(&z);
        // x + (z + y)
        let mut inner = z;
        inner.merge_with(&y);
        let mut right = x;
        right.merge_with(&inner);
        assert_eq!(left, right);
        let mut swapped = y;
        swapped.merge_with(&x);
        let mut direct = x;
        direct.merge_with(&y);
        assert_eq!(swapped, direct);
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", ReadStrandCount::new(1, 2, 3, 4)), "1,2,3,4");
    }
}
