use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use jshape::analysis::{StructureSummary, summarize};
use jshape::{export, fetch, input};

/// Validate and analyze JSON data
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Validate and analyze JSON from API endpoints or pasted content"
)]
struct Args {
    /// Input JSON file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Fetch the document from a URL instead of a file or stdin
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Print the pretty-printed document after the summary
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    // Logging is only active in debug builds; RUST_LOG selects the level
    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();

    let value = if let Some(url) = &args.url {
        fetch::fetch_document(url)
    } else if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)?;
        input::parse_document(&text)
    } else {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        input::parse_document(&text)
    };

    let value = match value {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    print_summary(&summarize(&value));

    if args.pretty {
        println!();
        println!("{}", export::to_pretty_json(&value));
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &StructureSummary) {
    println!("Root type:       {}", summary.root_type);
    println!("Top-level items: {}", summary.top_level_count);
    println!("Nesting depth:   {}", summary.nesting_depth);
    println!("Total items:     {}", summary.total_items);

    if summary.top_level_keys.is_empty() {
        return;
    }

    let width = summary
        .top_level_keys
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);

    println!();
    println!("Top-level keys:");
    for (key, label) in &summary.top_level_keys {
        println!("  {key:<width$}  {label}");
    }
}
