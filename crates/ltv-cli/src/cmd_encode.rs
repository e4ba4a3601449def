/// Implementation of `ltv encode`.
///
/// Reads a JSON manifest (see [`ltv_cli::manifest`]) and writes the
/// encoded stream to `-o <FILE>` or to stdout.
use std::fs;
use std::io::Write as _;

use anyhow::{Context, Result};
use ltv_cli::input::read_input;
use ltv_cli::manifest::Manifest;

use crate::EncodeArgs;

/// Run the `ltv encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, a record
/// cannot be encoded, or the output cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let text = String::from_utf8(raw).context("manifest is not valid UTF-8")?;
    let manifest = Manifest::parse(&text)?;
    let payload = manifest.encode()?;

    match &args.output {
        Some(path) => {
            fs::write(path, &payload)
                .with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!(
                "wrote {} record{} ({} bytes) to {}",
                manifest.records.len(),
                if manifest.records.len() == 1 { "" } else { "s" },
                payload.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&payload).context("cannot write stdout")?;
            stdout.flush().context("cannot write stdout")?;
        }
    }

    Ok(())
}
