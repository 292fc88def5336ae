extern crate env_logger;
extern crate haplotype_calls;
#[macro_use]
extern crate log;
extern crate serde_json;
use env_logger::Env;
use std::io::Write;
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <calls>", args[0]);
        std::process::exit(1);
    }
    let calls = haplotype_calls::load_calls(&args[1])?;
    debug!("Calls:{}", calls.len());
    for call in calls.iter() {
        debug!("{}", call);
    }
    let stdout = std::io::stdout();
    let mut wtr = stdout.lock();
    wtr.write_all(serde_json::ser::to_string_pretty(&calls)?.as_bytes())?;
    writeln!(wtr)?;
    Ok(())
}
