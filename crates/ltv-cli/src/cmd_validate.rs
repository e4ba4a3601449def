/// Implementation of `ltv validate`.
///
/// # Success output
///
/// ```text
/// ✓ Records: 2 records decoded
/// ✓ Coverage: 20 of 20 bytes consumed
/// ```
///
/// # Failure output
///
/// ```text
/// ✓ Records: 1 record decoded before failure
/// ✗ Error: insufficient data for value at offset 10: need 98 bytes, have 0
/// ```
use anyhow::{Result, anyhow};
use ltv_cli::{Report, render};
use ltv_cli::input::read_input;

use crate::ValidateArgs;

/// Run the `ltv validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or does not decode
/// cleanly to the end of the buffer.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = read_input(&args.file)?;
    let report = Report::decode(bytes);
    let n = report.records.len();
    let plural = if n == 1 { "" } else { "s" };

    match &report.error {
        None => {
            println!("✓ Records: {n} record{plural} decoded");
            println!(
                "✓ Coverage: {} of {} bytes consumed",
                report.consumed, report.total
            );
            Ok(())
        }
        Some(e) => {
            println!("✓ Records: {n} record{plural} decoded before failure");
            println!("✗ Error: {}", render::diagnostic(e));
            Err(anyhow!("validation failed"))
        }
    }
}
