//! Requeue CLI - reset posted rows in a posting queue.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = logging::init_logging(cli.verbose).and_then(|()| commands::reset::run(&cli));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
