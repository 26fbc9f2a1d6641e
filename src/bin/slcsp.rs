//! Compute the SLCSP for every zip code in an input file
//!
//! Reads zips.csv and plans.csv from the working directory (or the paths
//! given with --zips/--plans) and writes `zipcode,rate` CSV to stdout.

use anyhow::Context;
use clap::Parser;
use log::info;
use slcsp::{write_report, ReferencePaths, SlcspResolver};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "slcsp", version, about = "Second-lowest-cost silver plan by zip code")]
struct Cli {
    /// CSV file of zip codes with a `zipcode` header
    input: Option<PathBuf>,

    /// Zip to rate area table
    #[arg(long, default_value_os_t = ReferencePaths::default().zips)]
    zips: PathBuf,

    /// Plan rates table
    #[arg(long, default_value_os_t = ReferencePaths::default().plans)]
    plans: PathBuf,
}

impl Cli {
    fn reference_paths(&self) -> ReferencePaths {
        ReferencePaths {
            zips: self.zips.clone(),
            plans: self.plans.clone(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(input_path) = cli.input.as_deref() else {
        eprintln!("ERROR: please provide the input filename as an argument: slcsp <input file>");
        return Ok(ExitCode::FAILURE);
    };

    let resolver = SlcspResolver::load(&cli.reference_paths())
        .context("failed to load reference tables")?;

    let input = File::open(input_path)
        .with_context(|| format!("cannot open input file {}", input_path.display()))?;

    let summary = write_report(&resolver, BufReader::new(input), io::stdout().lock())
        .with_context(|| format!("failed to process {}", input_path.display()))?;

    info!(
        "Wrote {} rows, {} with a rate, {} undetermined",
        summary.rows,
        summary.determined,
        summary.rows - summary.determined
    );
    Ok(ExitCode::SUCCESS)
}
