//! wxo CLI - Import agent definitions into watsonx Orchestrate

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use wxo_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
