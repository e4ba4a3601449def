use crate::error::WireError;
use crate::tag::Tag;

/// Width of the decimal length field in bytes.
pub const LENGTH_FIELD_SIZE: usize = 3;

/// Width of the tag field in bytes.
pub const TAG_SIZE: usize = 2;

/// Total header size in bytes (fixed).
pub const HEADER_SIZE: usize = LENGTH_FIELD_SIZE + TAG_SIZE;

/// Smallest legal declared length: the tag alone, with an empty value.
pub const MIN_DECLARED_LENGTH: u16 = TAG_SIZE as u16;

/// Largest length a 3-digit decimal field can declare.
pub const MAX_DECLARED_LENGTH: u16 = 999;

/// Largest value a single record can carry.
pub const MAX_VALUE_LEN: usize = (MAX_DECLARED_LENGTH - MIN_DECLARED_LENGTH) as usize;

/// Record header — the first 5 bytes of every record.
///
/// ```text
/// ┌────────┬─────────┬───────────────────────────────────────────┐
/// │ Offset │ Size    │ Description                               │
/// ├────────┼─────────┼───────────────────────────────────────────┤
/// │ 0x00   │ 3 bytes │ Length: ASCII decimal, zero-padded ("007")│
/// │ 0x03   │ 2 bytes │ Tag: any two bytes, copied verbatim       │
/// │ 0x05   │ N bytes │ Value, N = length - 2                     │
/// └────────┴─────────┴───────────────────────────────────────────┘
/// ```
///
/// The declared length counts the tag, so it is always at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    /// Declared length as read from the wire (tag + value bytes).
    pub length: u16,
    pub tag: Tag,
}

impl RecordHeader {
    /// Build the header for a value of `value_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::LengthOverflow`] if `value_len` exceeds
    /// [`MAX_VALUE_LEN`] (997 bytes).
    pub fn for_value(tag: Tag, value_len: usize) -> Result<Self, WireError> {
        let length = value_len + TAG_SIZE;
        if value_len > MAX_VALUE_LEN {
            return Err(WireError::LengthOverflow { length });
        }
        let length = u16::try_from(length).map_err(|_| WireError::LengthOverflow { length })?;
        Ok(Self { length, tag })
    }

    /// Number of value bytes that follow this header.
    pub fn value_len(&self) -> usize {
        usize::from(self.length.saturating_sub(MIN_DECLARED_LENGTH))
    }

    /// Write the 5 header bytes, length zero-padded to 3 digits.
    ///
    /// # Errors
    ///
    /// - [`WireError::InvalidLength`] if `length` is below 2 or above 999.
    /// - [`WireError::Io`] if the writer fails.
    pub fn write_to(&self, w: &mut impl std::io::Write) -> Result<usize, WireError> {
        if !(MIN_DECLARED_LENGTH..=MAX_DECLARED_LENGTH).contains(&self.length) {
            return Err(WireError::InvalidLength {
                length: self.length,
            });
        }
        write!(w, "{:03}", self.length)?;
        w.write_all(self.tag.as_bytes())?;
        Ok(HEADER_SIZE)
    }

    /// Parse the header of the record starting at `offset` in `buf`.
    ///
    /// `buf` is the whole stream, not a sub-slice, so that errors can
    /// report absolute offsets. Nothing is consumed here; the caller
    /// owns the cursor.
    ///
    /// # Errors
    ///
    /// - [`WireError::TruncatedHeader`] if fewer than 5 bytes remain.
    /// - [`WireError::MalformedLength`] if the length field contains any
    ///   byte other than `0`-`9`.
    /// - [`WireError::LengthTooSmall`] if the declared length is below 2.
    pub fn read_from(buf: &[u8], offset: usize) -> Result<Self, WireError> {
        let available = buf.len().saturating_sub(offset);
        if available < HEADER_SIZE {
            return Err(WireError::TruncatedHeader {
                offset,
                available,
                required: HEADER_SIZE,
            });
        }

        let header = &buf[offset..offset + HEADER_SIZE];
        let (length_field, tag_field) = header.split_at(LENGTH_FIELD_SIZE);

        let length = parse_length(length_field).ok_or_else(|| WireError::MalformedLength {
            offset,
            raw: String::from_utf8_lossy(length_field).into_owned(),
        })?;

        let tag = Tag::new([tag_field[0], tag_field[1]]);

        if length < MIN_DECLARED_LENGTH {
            return Err(WireError::LengthTooSmall { offset, length });
        }

        Ok(Self { length, tag })
    }
}

/// Parse a fixed-width decimal length field.
///
/// Only ASCII digits are accepted: signs, spaces and any other byte make
/// the field invalid. Leading zeros are fine (`"007"` is 7).
pub fn parse_length(field: &[u8]) -> Option<u16> {
    if field.is_empty() {
        return None;
    }
    field.iter().try_fold(0u16, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(u16::from(b - b'0'))
        } else {
            None
        }
    })
}
