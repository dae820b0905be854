use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transport_catalogue::catalogue::UnknownStopPolicy;
use transport_catalogue::error::AppError;
use transport_catalogue::json::{ProcessOptions, process};

/// Answer a batch of transit queries described by a JSON request document.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Request document to read (standard input if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the response document (standard output if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the response on a single line
    #[arg(long)]
    compact: bool,

    /// Fail on bus stops that name no known stop instead of skipping them
    #[arg(long)]
    strict_stops: bool,
}

impl Args {
    fn options(&self) -> ProcessOptions {
        ProcessOptions {
            compact: self.compact,
            unknown_stops: if self.strict_stops {
                UnknownStopPolicy::Reject
            } else {
                UnknownStopPolicy::Skip
            },
        }
    }
}

fn main() -> ExitCode {
    // stdout carries the response document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let options = args.options();
    info!(input = ?args.input, output = ?args.output, "Processing request document");

    match (&args.input, &args.output) {
        (Some(input), Some(output)) => process(
            BufReader::new(File::open(input)?),
            BufWriter::new(File::create(output)?),
            options,
        ),
        (Some(input), None) => process(BufReader::new(File::open(input)?), io::stdout().lock(), options),
        (None, Some(output)) => process(io::stdin().lock(), BufWriter::new(File::create(output)?), options),
        (None, None) => process(io::stdin().lock(), io::stdout().lock(), options),
    }
}
