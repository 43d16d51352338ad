//! CLI binary for pdf2xml.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results. Every default reproduces the
//! original sample invocation, so a bare `pdf2xml` converts the BACnet
//! analog-input table on page 55 of `res/cpt_bacnet.pdf`.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2xml::{convert, convert_to_file, ConversionConfig, TableStrategy};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # The original sample invocation: page 55 of the BACnet reference,
  # written to analog_input.xml
  pdf2xml

  # Print the XML to stdout instead of writing a file
  pdf2xml --stdout

  # A different page, root element, and output file
  pdf2xml spec.pdf --page 103 --root BINARY_OUTPUT -o binary_output.xml

  # Tables drawn with ruling lines
  pdf2xml report.pdf --strategy lattice

  # Row statistics as JSON (XML still goes to the output file)
  pdf2xml --json

NOTES:
  Rows with any missing cell are skipped silently; cells that are present
  but empty appear as the literal string "unknown" in the output.
  Page indices are zero-based, matching the library API.
"#;

/// Extract a fixed-layout table from a PDF page and export it as XML.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2xml",
    version,
    about = "Extract a fixed-layout table from a PDF page and export it as XML",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    #[arg(default_value = "res/cpt_bacnet.pdf")]
    input: String,

    /// Write XML to this file.
    #[arg(short, long, env = "PDF2XML_OUTPUT", default_value = "analog_input.xml")]
    output: PathBuf,

    /// Print XML to stdout instead of writing the output file.
    #[arg(long, env = "PDF2XML_STDOUT", conflicts_with = "output")]
    stdout: bool,

    /// Zero-based page index where the table is expected.
    #[arg(long, env = "PDF2XML_PAGE", default_value_t = 55)]
    page: usize,

    /// Tag name of the document (root) element.
    #[arg(long, env = "PDF2XML_ROOT", default_value = "ANALOG_INPUT")]
    root: String,

    /// Table-detection strategy: text or lattice.
    #[arg(long, env = "PDF2XML_STRATEGY", value_enum, default_value = "text")]
    strategy: StrategyArg,

    /// Print row statistics as JSON to stdout.
    #[arg(long, env = "PDF2XML_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2XML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2XML_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum StrategyArg {
    Text,
    Lattice,
}

impl From<StrategyArg> for TableStrategy {
    fn from(v: StrategyArg) -> Self {
        match v {
            StrategyArg::Text => TableStrategy::Text,
            StrategyArg::Lattice => TableStrategy::Lattice,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = ConversionConfig::builder()
        .page(cli.page)
        .root_name(&cli.root)
        .strategy(cli.strategy.clone().into())
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = if cli.stdout {
        let output = convert(&cli.input, &config).context("Conversion failed")?;
        let bytes = output.root.to_bytes().context("Serialisation failed")?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(&bytes)
            .context("Failed to write to stdout")?;
        handle.write_all(b"\n").ok();
        output.stats
    } else {
        let stats = convert_to_file(&cli.input, &cli.output, &config)
            .context("Conversion failed")?;
        if !cli.quiet {
            eprintln!(
                "✔  {}/{} rows  {}ms  →  {}",
                stats.converted_rows,
                stats.data_rows,
                stats.total_duration_ms,
                cli.output.display(),
            );
        }
        stats
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
        );
    } else if !cli.quiet && stats.skipped_rows > 0 {
        eprintln!("   {} incomplete rows skipped", stats.skipped_rows);
    }

    Ok(())
}
