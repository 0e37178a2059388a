//! comgeom-g - convert a COMGEOM deck to a CSG database dump

use anyhow::{Context, Result};
use clap::Parser;
use comgeom::{AsciiDatabase, ComGeomReader, ConversionConfiguration, Dialect, NotificationType};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "comgeom-g")]
#[command(about = "Convert a COMGEOM geometry deck to a CSG database", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Deck dialect: 0 (OR-clause regions), 1, 4 or 5
    #[arg(short, long, default_value = "5")]
    dialect: Dialect,

    /// Suffix appended to every generated object name
    #[arg(short, long, default_value = "")]
    suffix: String,

    /// Cut long suffixes to 13 characters
    #[arg(short, long)]
    truncate: bool,

    /// Fallback encoding for lines that are not UTF-8 (e.g. windows-1252)
    #[arg(long)]
    encoding: Option<String>,

    /// Input deck
    input: PathBuf,

    /// Output database dump
    output: PathBuf,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    // RUST_LOG directives take precedence over the -v level
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ConversionConfiguration::new(cli.dialect)
        .with_suffix(cli.suffix)
        .with_truncated_names(cli.truncate);
    if let Some(label) = &cli.encoding {
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
            .with_context(|| format!("unknown encoding '{}'", label))?;
        config = config.with_encoding(encoding);
    }

    let reader = ComGeomReader::from_file(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?
        .with_configuration(config);
    let mut database = AsciiDatabase::create(&cli.output)
        .with_context(|| format!("cannot create {}", cli.output.display()))?;

    let summary = reader
        .convert(&mut database)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    println!("Title: {}", summary.title);
    println!("Units: {}", summary.units);
    println!(
        "Solids: {} processed, {} written, {} failed",
        summary.solids_processed, summary.solids_written, summary.solids_failed
    );
    println!(
        "Regions: {} written, {} aliases",
        summary.regions_written, summary.aliases
    );
    println!("Groups: {}", summary.groups_written);
    let errors = summary.notifications.of_type(NotificationType::Error).len();
    if !summary.notifications.is_empty() {
        println!(
            "Diagnostics: {} ({} solid errors)",
            summary.notifications.len(),
            errors
        );
    }

    Ok(())
}
