//! CLI entry point for the sprite silhouette generator

use clap::Parser;
use spritewalk::io::cli::{BatchGenerator, Cli};

fn main() -> spritewalk::Result<()> {
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.process()
}
