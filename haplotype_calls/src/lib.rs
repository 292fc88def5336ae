//! This is a library to stitch per-block haplotype genotyping results
//! into one genome-wide call set, and to persist that call set between
//! pipeline stages.
#[allow(unused_imports)]
#[macro_use]
extern crate log;
extern crate rayon;
extern crate rmp_serde;
#[macro_use]
extern crate serde;
extern crate thiserror;
pub mod block;
pub mod error;
pub mod hap_call;
pub mod io;
pub mod read_strand;
pub use block::{Genotype, GenotypedBlock, HapSample, VarStats};
pub use error::{Error, Result};
pub use hap_call::{HaplotypeCall, HaplotypeCalls};
pub use io::{load_calls, save_calls};
pub use read_strand::ReadStrandCount;
use std::path::Path;

/// Load every call file in `paths`, merge them from left to right,
/// and finalize the result. All files should come from the same set of blocks,
/// otherwise `Error::BlockCountMismatch` is returned.
/// # Example
/// ```ignore
/// let calls = haplotype_calls::merge_files(&["a.hapc", "b.hapc"]).unwrap();
/// haplotype_calls::save_calls(&calls, "merged.hapc").unwrap();
/// ```
pub fn merge_files<P: AsRef<Path>>(paths: &[P]) -> Result<HaplotypeCalls> {
    let mut paths = paths.iter();
    let mut merged = match paths.next() {
        Some(path) => HaplotypeCalls::new(load_calls(path)?),
        None => return Ok(HaplotypeCalls::default()),
    };
    for path in paths {
        let other = HaplotypeCalls::new(load_calls(path)?);
        if other.len() != merged.len() {
            error!("Block counts differ in {}", path.as_ref().display());
            return Err(Error::BlockCountMismatch {
                path: path.as_ref().to_path_buf(),
                expected: merged.len(),
                found: other.len(),
            });
        }
        debug!(
            "Merging {} calls from {}",
            other.len(),
            path.as_ref().display()
        );
        merged.merge_with(&other);
    }
    merged.make_calls_unique();
    Ok(merged)
}

#[cfg(test)]
mod tests;
