/// LTV command-line tool — inspect, validate, decode, and encode
/// Length-Tag-Value streams.
///
/// # Command overview
///
/// ```text
/// ltv <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print one line per record with offsets and a value preview
///   validate   Check that a stream decodes cleanly to the end
///   decode     Print records as text lines or JSON
///   encode     Build a stream from a JSON manifest
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Every `<FILE>` argument accepts `-` for stdin.
///
/// # Exit codes
///
/// | Code | Meaning                                    |
/// |------|--------------------------------------------|
/// | 0    | Success                                    |
/// | 1    | Error (I/O failure, malformed stream, etc.) |
///
/// Logs and error details are written to stderr so stdout can be piped
/// cleanly. `RUST_LOG` overrides the log filter.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "ltv", version, about = "Length-Tag-Value stream tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a per-record summary of an LTV stream.
    Inspect(InspectArgs),
    /// Check an LTV stream for structural correctness.
    Validate(ValidateArgs),
    /// Print the records of an LTV stream.
    Decode(DecodeArgs),
    /// Create an LTV stream from a JSON manifest.
    Encode(EncodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `ltv inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the stream, or `-` for stdin.
    pub file: PathBuf,

    /// Show a 16-byte-per-line hex dump of each value.
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `ltv validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the stream, or `-` for stdin.
    pub file: PathBuf,
}

/// Output format for `ltv decode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `tag<TAB>value` per line.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Arguments for `ltv decode`.
///
/// ```text
/// ┌───────────────┬───────────────────────────────────────────┐
/// │ Flag          │ Values / default                          │
/// ├───────────────┼───────────────────────────────────────────┤
/// │ --format      │ text (default) | json                     │
/// │ -o / --output │ write to file instead of stdout           │
/// └───────────────┴───────────────────────────────────────────┘
/// ```
///
/// Records decoded before a failure are still printed; the failure is
/// then reported on stderr and the exit code is 1.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the stream, or `-` for stdin.
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `ltv encode`.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest describing the records.
    pub input: PathBuf,

    /// Write the stream to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    ltv_cli::logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
