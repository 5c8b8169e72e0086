use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use json2csv::{convert_file, Error};
use tracing_subscriber::{fmt, EnvFilter};

/// Convert a JSON file holding an array of objects to a CSV file.
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a JSON array of records to CSV", long_about = None)]
struct Cli {
    /// JSON file to read
    #[arg(default_value = "input.json")]
    input: PathBuf,
    /// CSV file to write
    #[arg(default_value = "output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr; RUST_LOG overrides the default level
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    convert_file(&cli.input, &cli.output).map_err(|e| {
        let step = match &e {
            Error::Read { .. } => "Error reading JSON file",
            Error::Write { .. } => "Error writing CSV file",
            Error::InvalidInput | Error::Parse(_) => "Error processing JSON",
        };
        anyhow::Error::new(e).context(step)
    })?;

    println!("CSV file has been saved to {}", cli.output.display());
    Ok(())
}
