/// Implementation of `ltv decode`.
///
/// Prints every record in `text` or `json` form. Partial output is still
/// written when the stream stops early, then the decode error is
/// returned so the process exits with code 1.
use std::fs;

use anyhow::{Context, Result};
use ltv_cli::input::{display_name, read_input};
use ltv_cli::{Report, render};
use tracing::debug;

use crate::{DecodeArgs, OutputFormat};

/// Run the `ltv decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the output cannot be
/// written, or the stream does not decode cleanly.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = read_input(&args.file)?;
    let report = Report::decode(bytes);
    debug!(records = report.records.len(), format = ?args.format, "rendering");

    let rendered = match args.format {
        OutputFormat::Text => render::text(&report),
        OutputFormat::Json => {
            let mut json = render::json(&report).context("failed to serialize records")?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    match report.error {
        None => Ok(()),
        Some(e) => Err(e).with_context(|| format!("failed to decode {}", display_name(&args.file))),
    }
}
