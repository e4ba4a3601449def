use ltv_wire::WireError;

/// Errors that can occur while decoding an LTV stream.
///
/// Every variant is terminal for the current pass: the decoder does
/// not skip or resynchronise past a bad record.
///
/// ```text
///   DecodeError
///   ├── EndOfStream       ← decode_next() called with no bytes left
///   ├── TruncatedValue    ← value runs past the end of the buffer
///   └── Wire(WireError)   ← header failures from ltv-wire:
///       ├── TruncatedHeader   fewer than 5 bytes remain
///       ├── MalformedLength   length field is not 3 ASCII digits
///       └── LengthTooSmall    declared length below 2
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// `decode_next()` was called with the cursor at the end of the buffer.
    ///
    /// This is the benign loop-termination signal; `decode_all()` never
    /// returns it.
    #[error("no more data to parse")]
    EndOfStream,

    /// The declared value extends past the end of the buffer.
    #[error("insufficient data for value at offset {offset}: need {needed} bytes, have {available}")]
    TruncatedValue {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The record header failed validation.
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl DecodeError {
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }

    /// Offset of the record that failed, where one is known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::TruncatedValue { offset, .. }
            | Self::Wire(
                WireError::TruncatedHeader { offset, .. }
                | WireError::MalformedLength { offset, .. }
                | WireError::LengthTooSmall { offset, .. },
            ) => Some(*offset),
            _ => None,
        }
    }
}
