/// Implementation of `ltv inspect`.
///
/// Decodes the whole stream and prints one entry per record: its index,
/// header offset, tag, declared length and a lossy preview of the value.
/// If decoding stops early the records before the failure are still
/// listed, followed by a `✗` line, and the command exits with code 1.
use anyhow::{Result, anyhow};
use ltv_cli::input::{display_name, read_input};
use ltv_cli::{Report, render};

use crate::InspectArgs;

/// Run the `ltv inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the stream does not
/// decode to the end.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = read_input(&args.file)?;
    let report = Report::decode(bytes);

    print!("{}", render::inspect(&report, args.show_hex));

    if report.is_complete() {
        Ok(())
    } else {
        Err(anyhow!("{} is not a complete LTV stream", display_name(&args.file)))
    }
}
