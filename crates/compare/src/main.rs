// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compare two saved outputs as multisets of words.

use clap::Parser;
use std::path::PathBuf;
use twinshell_compare::{MultisetComparator, Normalizer, DEFAULT_STOP_WORDS};

/// Compare a reference output file against a candidate output file
#[derive(Parser, Debug)]
#[command(name = "twinshell-compare")]
#[command(about = "Compare two captured outputs as bags of words")]
struct Cli {
    /// Reference output file
    reference: PathBuf,

    /// Candidate output file
    candidate: PathBuf,

    /// Noise fragment to strip from words (repeatable, replaces the defaults)
    #[arg(long = "stop-word", value_name = "TEXT")]
    stop_words: Vec<String>,

    /// Print the leftover words as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (reference, candidate) = match tokio::try_join!(
        tokio::fs::read_to_string(&cli.reference),
        tokio::fs::read_to_string(&cli.candidate),
    ) {
        Ok(texts) => texts,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let normalizer = if cli.stop_words.is_empty() {
        Normalizer::new(DEFAULT_STOP_WORDS)
    } else {
        Normalizer::new(&cli.stop_words)
    };
    let comparison = MultisetComparator::new(normalizer).compare(&reference, &candidate);

    if cli.json {
        println!("{}", serde_json::to_string(&comparison)?);
    } else if comparison.is_equivalent() {
        println!("equivalent");
    } else {
        println!("different");
        for (word, count) in comparison.reference_only.iter() {
            println!("  reference: {word} x{count}");
        }
        for (word, count) in comparison.candidate_only.iter() {
            println!("  candidate: {word} x{count}");
        }
    }

    if !comparison.is_equivalent() {
        std::process::exit(1);
    }
    Ok(())
}
