use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use compute_sales::{compute_total_sales, read_catalog, read_sales, Report};

/// Compute total sales cost.
///
/// Computes the total cost of the sales in SALES_RECORD_FILE at the prices
/// listed in PRICE_CATALOG_FILE, printing the result and writing it to a
/// results file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the price catalog JSON file.
    price_catalog_file: PathBuf,

    /// Path to the sales record JSON file.
    sales_record_file: PathBuf,

    /// Path of the file to write the results to.
    #[arg(short, long, default_value = "SalesResults.txt")]
    output: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    if run(&args, &mut io::stdout().lock())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Loads both documents, prints the report to `out` and saves it to the
/// output file.
///
/// Returns `false`, having printed every load failure, if either document
/// could not be loaded.
fn run(args: &Args, out: &mut impl Write) -> Result<bool> {
    let start = Instant::now();
    let catalog = read_catalog(&args.price_catalog_file);
    let sales = read_sales(&args.sales_record_file);
    let (catalog, sales) = match (catalog, sales) {
        (Ok(catalog), Ok(sales)) => (catalog, sales),
        (catalog, sales) => {
            for err in [catalog.err(), sales.err()].into_iter().flatten() {
                writeln!(out, "{err}")?;
            }
            writeln!(out, "Error: Failed to load input files.")?;
            return Ok(false);
        }
    };
    let report = Report::new(compute_total_sales(&catalog, &sales), start.elapsed());
    writeln!(out, "{report}")?;
    report.write_to(&args.output)?;
    Ok(true)
}
