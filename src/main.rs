// clc — count lines of code
//
// Scans files and directories, classifies each file by language
// (extension first, shebang fallback), counts newline bytes across all
// CPU cores via Rayon, and prints a per-language report.

mod cli;
mod counter;
mod display;
mod filter;
mod language;
mod walker;

use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    let args = cli::Args::parse();

    let mut registry = language::Registry::with_builtins();
    registry.load_definition_files();

    let config = match counter::ScanConfig::from_args(&args, &registry) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e}", "[ERROR]".red().bold());
            process::exit(1);
        }
    };

    let outcome = counter::run_scan(&config, &registry);

    if config.summary {
        display::display_summary(
            &outcome.records,
            &registry,
            config.sortbylines,
            outcome.elapsed,
        );
    } else {
        display::display_full(
            &outcome.records,
            &registry,
            config.sortbylines,
            config.maxwidth,
        );
    }
}
