//! CLI module - Command-line interface definitions and the run loop

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use crate::core::paths::{absolutize, basename_stem};
use crate::core::resolve::resolve_pattern;
use crate::core::tokenize::leading_tokens;

/// Pattern used when no positional pattern is given: the default
/// directory, searched recursively.
pub const DEFAULT_PATTERN: &str = "files_containing_names/**/*";

/// Diagnostic written to stderr when no pattern resolved to any file.
pub const NO_MATCH_DIAGNOSTIC: &str = "No matching files found.";

/// namesift - get the first non-numeric substrings from file(s), directorie(s) or glob pattern(s).
#[derive(Parser, Debug)]
#[command(name = "namesift")]
#[command(
    author,
    version,
    about,
    long_about = r#"namesift expands every PATTERN, keeps the matches that are regular files,
strips directory and extension from each match, and prints per file the
leading underscore-separated tokens up to (but not including) the first
token containing a digit.

Special glob characters:
  *   matches any number of characters in a file or folder name (non-recursive)
  **  matches any number of directories (recursive)

Examples:

    namesift files_containing_names/Farida___Bekroukra_11_06_2025_11_06_2025_9dk5sqh0na3nv0l

    namesift 'files_containing_names/*'             # finds all files in 'files_containing_names'

    namesift 'files_containing_names/subfolder/*.txt'

    namesift 'files_containing_names/my folder/*'

    namesift 'files_containing_names/**/*'          # finds all files, recursively
"#
)]
pub struct Cli {
    /// Prints extra information, useful to debug.
    #[arg(
        short,
        long,
        long_help = "Print the raw pattern list and, for each pattern, the pattern next to its\n\
resolved absolute path, before normal output."
    )]
    pub verbose: bool,

    /// Paths, directories or glob patterns to take filenames from.
    #[arg(
        value_name = "PATTERN",
        default_value = DEFAULT_PATTERN,
        long_help = "Path of the input (examples: folder/file, folder/* or 'folder/**/*').\n\n\
When omitted, the default directory 'files_containing_names' is searched\n\
recursively."
    )]
    pub patterns: Vec<String>,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        println!("{:?}", cli.patterns);
    }

    let mut basenames: Vec<String> = Vec::new();

    for pattern in &cli.patterns {
        let path = absolutize(Path::new(pattern));
        if cli.verbose {
            println!("{} {}", pattern.bold(), path.display());
        }

        for file in resolve_pattern(&path.to_string_lossy())? {
            basenames.push(basename_stem(&file));
        }
    }

    if basenames.is_empty() {
        eprintln!("{}", NO_MATCH_DIAGNOSTIC);
        std::process::exit(1);
    }

    for basename in &basenames {
        println!("{}", leading_tokens(basename));
    }

    Ok(())
}
