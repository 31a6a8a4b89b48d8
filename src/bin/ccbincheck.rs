//! CLI tool for card number checking and issuer lookup.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default): one card number per line, empty line quits
//! ccbincheck --banks banks.txt
//!
//! # Check a single number
//! ccbincheck check 4532015112830366
//!
//! # Luhn checksum only
//! ccbincheck luhn 4532015112830366
//!
//! # Look up the issuer of a BIN
//! ccbincheck lookup 453201
//! ```

use cc_bincheck::bin::{Bin, BinTable, Issuer};
use cc_bincheck::input::ReaderSource;
use cc_bincheck::report::{JsonReporter, Reporter, TextReporter};
use cc_bincheck::{passes_luhn, LoadError, Session};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "ccbincheck")]
#[command(
    author,
    version,
    about = "Card number checker: format, Luhn checksum and issuing bank lookup"
)]
struct Cli {
    /// Bank data file, one `<name>,<from>,<to>` record per line
    #[arg(short, long, env = "CCBINCHECK_BANKS", default_value = "banks.txt", global = true)]
    banks: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    output: OutputFormat,

    /// Log filter (overrides RUST_LOG), e.g. `debug` or `cc_bincheck=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read card numbers from stdin until an empty line or end of input
    Session,

    /// Check a single card number
    Check {
        /// Card number (digits only)
        card_number: String,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Look up the issuing bank of a BIN
    Lookup {
        /// Six-digit BIN (0-999999)
        bin: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => cmd_session(&cli.banks, cli.output),
        Commands::Check { card_number } => cmd_check(&cli.banks, cli.output, &card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Lookup { bin } => cmd_lookup(&cli.banks, bin),
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_table(path: &Path) -> Result<BinTable, LoadError> {
    let table = BinTable::from_file(path)?;
    tracing::info!(path = %path.display(), records = table.len(), "bank data loaded");
    Ok(table)
}

fn reporter(output: OutputFormat) -> Box<dyn Reporter> {
    match output {
        OutputFormat::Text => Box::new(TextReporter::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonReporter::new(io::stdout())),
    }
}

fn cmd_session(banks: &Path, output: OutputFormat) -> ExitCode {
    let table = match load_table(banks) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading bank data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut source = ReaderSource::new(io::stdin().lock());
    let mut reporter = reporter(output);

    match Session::new(&table).run(&mut source, reporter.as_mut()) {
        Ok(summary) => {
            tracing::info!(
                total = summary.total(),
                valid = summary.valid(),
                identified = summary.identified,
                "session ended"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Input error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(banks: &Path, output: OutputFormat, card_number: &str) -> ExitCode {
    let table = match load_table(banks) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading bank data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = Session::new(&table).evaluate(card_number.trim());
    if let Err(e) = reporter(output).report(&report) {
        eprintln!("Output error: {}", e);
        return ExitCode::FAILURE;
    }

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if passes_luhn(card_number.trim()) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_lookup(banks: &Path, bin: u32) -> ExitCode {
    let Some(bin) = Bin::new(bin) else {
        eprintln!("Error: BIN must be at most 999999");
        return ExitCode::FAILURE;
    };

    let table = match load_table(banks) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading bank data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match table.lookup(bin) {
        Issuer::Known(bank) => {
            println!("BIN {}: {}", bin, bank);
            ExitCode::SUCCESS
        }
        Issuer::Unknown => {
            println!("BIN {}: Issuer not identified", bin);
            ExitCode::FAILURE
        }
    }
}
