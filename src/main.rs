//! namesift - extract leading name tokens from underscore-separated filenames
//!
//! namesift provides:
//! - Path pattern expansion (files, directories, `*` and recursive `**` globs)
//! - Basename extraction with the final extension stripped
//! - Tokenization of each basename up to the first digit-bearing token

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
