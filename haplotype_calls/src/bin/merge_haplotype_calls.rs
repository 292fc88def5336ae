extern crate env_logger;
extern crate haplotype_calls;
#[macro_use]
extern crate log;
use env_logger::Env;
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <output> <calls>...", args[0]);
        std::process::exit(1);
    }
    info!("Merging {} call files", args.len() - 2);
    let merged = haplotype_calls::merge_files(&args[2..])
        .and_then(|calls| haplotype_calls::save_calls(&calls, &args[1]).map(|_| calls));
    match merged {
        Ok(calls) => info!("Wrote {} calls to {}", calls.len(), args[1]),
        Err(why) => {
            error!("{}", why);
            std::process::exit(1);
        }
    }
}
