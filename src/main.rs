use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use square_solver::session;

#[derive(Parser, Debug)]
#[command(
    name = "app",
    about = "Find the biggest obstacle-free square on each map and draw it in",
    version
)]
struct Cli {
    /// Map files to process in order; reads one map from stdin when omitted.
    maps: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let mut diag = io::stderr();

    if let Err(err) = session::run_sources(&cli.maps, &mut output, &mut diag) {
        log::warn!("write failed: {err}");
    }
    if let Err(err) = output.flush() {
        log::warn!("flush failed: {err}");
    }
}
