use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::estimator::estimate_file;
use crate::tokenizer::{BpeTokenizer, ENCODING_NAME};
use crate::utils::setup_logging;

pub const DEFAULT_EXPORT_FILE: &str = "conversations.json";

#[derive(Parser)]
#[command(name = "conversation-cost")]
#[command(version = "0.1.0")]
#[command(about = "Estimate API cost of a conversation export", long_about = None)]
pub struct Cli {
    /// Path to the export file
    #[arg(default_value = DEFAULT_EXPORT_FILE)]
    pub file: PathBuf,

    /// Log progress at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    show_estimate(&cli.file)
}

fn show_estimate(path: &Path) -> Result<()> {
    info!("Estimating cost of {} with {}", path.display(), ENCODING_NAME);

    let tokenizer = BpeTokenizer::o200k_base()?;
    let report = estimate_file(path, &tokenizer)?;

    println!("{}", report);

    Ok(())
}
