//! Hand History Converter Binary
//!
//! Converts PokerStars Zoom hand histories into PioSolver-dialect text:
//! seats renumbered, players relabeled by position, summaries rebuilt.
//!
//! Options: [SOURCE], --output, --json

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use zoom2pio::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// source hand history file, prompted for when omitted
    source: Option<PathBuf>,
    /// destination file, derived from the source when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// print the completion report as json
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    let source = match args.source {
        Some(source) => source,
        None => prompt()?,
    };
    let report = save::convert(&source, args.output.as_deref())?;
    match args.json {
        true => println!("{}", serde_json::to_string(&report)?),
        false => println!("{}", report.to_string().green().bold()),
    }
    Ok(())
}

/// stand-in for the file picker: ask for the source path at the terminal.
fn prompt() -> anyhow::Result<PathBuf> {
    let source = dialoguer::Input::<String>::new()
        .with_prompt("hand history file")
        .validate_with(|path: &String| -> Result<(), &str> {
            match PathBuf::from(path).is_file() {
                true => Ok(()),
                false => Err("no such file"),
            }
        })
        .interact()?;
    Ok(PathBuf::from(source))
}
