/// Header-level failures shared by the decoder and the encoder.
///
/// Every read-side variant carries the `offset` of the record whose
/// header failed, i.e. the cursor position before the failed step.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Fewer than [`HEADER_SIZE`](crate::HEADER_SIZE) bytes remain for a new header.
    #[error("truncated header at offset {offset}: need {required} bytes, have {available}")]
    TruncatedHeader {
        offset: usize,
        available: usize,
        required: usize,
    },

    /// The 3-byte length field is not made of ASCII digits only.
    ///
    /// `raw` is the offending field, decoded lossily for display.
    #[error("malformed length field {raw:?} at offset {offset}")]
    MalformedLength { offset: usize, raw: String },

    /// The declared length cannot cover the 2-byte tag it includes.
    #[error("declared length {length} at offset {offset} is too small (must be at least 2 to include tag)")]
    LengthTooSmall { offset: usize, length: u16 },

    /// A value is too long for the 3-digit length field.
    #[error("declared length {length} does not fit the 3-digit length field (max 999)")]
    LengthOverflow { length: usize },

    /// A header about to be written declares a length the 3-digit field
    /// cannot carry, or one too small to cover the tag.
    #[error("declared length {length} is outside {min}..={max}", min = crate::MIN_DECLARED_LENGTH, max = crate::MAX_DECLARED_LENGTH)]
    InvalidLength { length: u16 },

    /// A record's declared length disagrees with its value.
    #[error("declared length {length} does not frame a {value_len}-byte value")]
    LengthMismatch { length: u16, value_len: usize },

    /// A tag was not exactly 2 bytes.
    #[error("tag must be exactly 2 bytes, got {len}")]
    InvalidTag { len: usize },

    /// I/O error while writing a record.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
