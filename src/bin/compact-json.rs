//! Rewrites a JSON file in compact form, stripping all whitespace.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: compact-json <input.json> <output.json>");
        return ExitCode::from(2);
    }

    match run(&args[1], &args[2]) {
        Ok(()) => {
            println!("Whitespace removed and saved to {}", args[2]);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("compact-json: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(input)?))?;
    serde_json::to_writer(BufWriter::new(File::create(output)?), &data)?;
    Ok(())
}
