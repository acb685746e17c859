//! CLI entry point for pipe pattern generation

use clap::Parser;
use pipetile::io::cli::{Cli, PatternGenerator};
use pipetile::io::logging::init_logging;

fn main() -> pipetile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut generator = PatternGenerator::new(cli);
    generator.process()
}
