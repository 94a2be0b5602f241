use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use paybysquare::application::batch::BatchValidator;
use paybysquare::application::validator::Validator;
use paybysquare::interfaces::csv::violation_writer::ViolationWriter;
use paybysquare::interfaces::json::request_reader::RequestReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding one payment request or an array of them
    input: PathBuf,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Exit with an error when any request has violations
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let mut requests = Vec::new();
    let mut unreadable = 0;
    for (index, result) in reader.requests().into_diagnostic()?.enumerate() {
        match result {
            Ok(request) => requests.push((index, request)),
            Err(e) => {
                unreadable += 1;
                error!(request = index, "Error reading payment request: {}", e);
            }
        }
    }
    info!(input = %cli.input.display(), requests = requests.len(), "Loaded payment requests");

    let batch = BatchValidator::new(Validator::new().into_diagnostic()?);
    let reports = batch.validate_indexed(requests).await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        Format::Csv => {
            let mut writer = ViolationWriter::new(stdout.lock());
            writer.write_reports(&reports).into_diagnostic()?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(stdout.lock(), &reports).into_diagnostic()?;
            println!();
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if cli.strict && invalid + unreadable > 0 {
        return Err(miette!(
            "{invalid} payment request(s) failed validation, {unreadable} could not be read"
        ));
    }
    Ok(())
}
