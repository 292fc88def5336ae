//! This is a library to remove variant evidence lying inside
//! the footprint of amplicon-sequencing primers.
#[allow(unused_imports)]
#[macro_use]
extern crate log;
extern crate rayon;
#[macro_use]
extern crate serde;
extern crate thiserror;
mod config;
pub use config::*;
pub mod error;
pub mod index;
pub mod path;
pub mod primers;
pub mod region;
pub use error::{Error, Result};
pub use index::{AbsolutePosition, ChromosomeOffsets, Location, PositionIndex};
pub use path::{GenotypePath, GenotypePaths, IS_SEQ_REVERSED};
pub use primers::{PrimerFilter, Primers, Window};
pub use region::GenomicRegion;
