use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use contexx::loader::{self, LoadError};
use contexx::report;
use contexx::{Document, RecursiveSplitter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Split a text file into overlapping chunks and report chunk statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input text file
    #[arg(default_value = "data/notes.txt")]
    input: PathBuf,

    /// Maximum size of each chunk, in characters
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Characters of trailing context shared with the next chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
    chunk_overlap: usize,

    /// Emit chunks as JSON instead of the plain-text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Invalid parameters are surfaced immediately; there is nothing useful
    // to produce from a splitter that cannot converge.
    let splitter = match RecursiveSplitter::builder()
        .chunk_size(args.chunk_size)
        .chunk_overlap(args.chunk_overlap)
        .build()
    {
        Ok(splitter) => splitter,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // Read failures are reported and converted into an empty result.
    let text = match loader::read_text(&args.input) {
        Ok(text) => text,
        Err(LoadError::NotFound(path)) => {
            eprintln!("Error: file '{}' not found.", path.display());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: an unexpected error occurred: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    let documents = splitter.create_documents([text.as_str()]);

    if let Err(e) = emit(&args, &text, &documents) {
        eprintln!("Error: an unexpected error occurred: {}", e);
    }

    ExitCode::SUCCESS
}

/// Write either the console report or the JSON rendering of the chunks
fn emit(args: &Args, text: &str, documents: &[Document]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let json = serde_json::to_string_pretty(documents)?;
        writeln!(out, "{}", json)?;
    } else {
        report::render(&mut out, text.chars().count(), documents)?;
    }

    Ok(())
}
