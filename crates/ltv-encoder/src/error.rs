use ltv_wire::WireError;

/// Errors that can occur while encoding an LTV stream.
///
/// ```text
///   EncodeError
///   ├── InvalidTag        ← tag is not exactly 2 bytes
///   ├── ValueTooLarge     ← value does not fit the 3-digit length
///   └── Wire(WireError)   ← from ltv-wire serialization
/// ```
///
/// `index` is the zero-based position of the offending record in the
/// order it was added.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("record {index}: tag must be exactly 2 bytes, got {len}")]
    InvalidTag { index: usize, len: usize },

    #[error("record {index}: value exceeds maximum size ({size} bytes, limit {limit})")]
    ValueTooLarge {
        index: usize,
        size: usize,
        limit: usize,
    },

    #[error(transparent)]
    Wire(#[from] WireError),
}
