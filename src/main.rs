use anyhow::Result;
use clap::Parser;
use namecrunch::{convert::convert, input::load_rows, output::write_records};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a ranked names CSV into a JSON name list"
)]
struct Args {
    /// Ranked CSV with a header row; needs `name` and `rank` columns.
    #[arg(short, long)]
    input: PathBuf,

    /// Destination JSON file; parent directories are created as needed.
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum number of candidate rows kept after sorting by rank.
    #[arg(long, default_value_t = 1500)]
    max: usize,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let args = Args::parse();

    let rows = load_rows(&args.input)?;
    info!(rows = rows.len(), "loaded input CSV");

    let records = convert(rows, args.max);
    write_records(&records, &args.output)?;

    info!("wrote {} names to {}", records.len(), args.output.display());
    Ok(())
}
