extern crate env_logger;
#[macro_use]
extern crate log;
extern crate primer_filter;
extern crate serde_json;
use env_logger::Env;
use primer_filter::{ChromosomeOffsets, Primers, DEFAULT_CONFIG};
use std::io::Write;
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <primers.bedpe> <reference.fai>", args[0]);
        std::process::exit(1);
    }
    let primers = Primers::from_file(&args[1])?;
    info!("Primer pairs:{}", primers.len());
    let offsets = ChromosomeOffsets::from_fai(&args[2])?;
    debug!("Chromosomes:{:?}", offsets.names());
    let left = primers.left_windows(&offsets, &DEFAULT_CONFIG)?;
    let right = primers.right_windows(&offsets, &DEFAULT_CONFIG)?;
    let windows: Vec<_> = left.into_iter().zip(right.into_iter()).collect();
    let stdout = std::io::stdout();
    let mut wtr = stdout.lock();
    wtr.write_all(serde_json::ser::to_string_pretty(&windows)?.as_bytes())?;
    writeln!(wtr)?;
    Ok(())
}
