use bytes::Bytes;
use ltv_wire::{HEADER_SIZE, MAX_VALUE_LEN, Record, RecordHeader, Tag};
use tracing::debug;

use crate::error::EncodeError;

/// LTV encoder — builds a stream from tag/value pairs.
///
/// The inverse of `StreamDecoder` in `ltv-decoder`. Records are added
/// with the chainable [`add_record`](Self::add_record) and
/// [`add_text`](Self::add_text) methods and validated together when
/// [`encode`](Self::encode) is called, so a bad tag or an oversized
/// value is reported with the index of the record that caused it.
///
/// # Usage
///
/// ```rust
/// use ltv_encoder::LtvEncoder;
///
/// let payload = LtvEncoder::new()
///     .add_text("01", "Hello")
///     .add_text("02", "World")
///     .encode()
///     .unwrap();
///
/// assert_eq!(payload, b"00701Hello00702World");
/// ```
///
/// # Output layout
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────────┐
/// │ [5 bytes]    │ Record 0 header ("007" + tag)             │
/// │ [N bytes]    │ Record 0 value                            │
/// │ [5 bytes]    │ Record 1 header                           │
/// │ ...          │                                           │
/// └──────────────┴───────────────────────────────────────────┘
/// ```
///
/// There is no file header and no terminator: the stream ends where
/// the last value ends. An encoder with no records produces an empty
/// stream, which decodes to zero records.
#[derive(Clone, Debug, Default)]
pub struct LtvEncoder {
    records: Vec<PendingRecord>,
}

/// A record awaiting serialization. The tag is kept raw until
/// `.encode()` so width errors surface with their index.
#[derive(Clone, Debug)]
struct PendingRecord {
    tag: Vec<u8>,
    value: Bytes,
}

impl LtvEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record with raw tag and value bytes.
    pub fn add_record(&mut self, tag: impl AsRef<[u8]>, value: impl Into<Bytes>) -> &mut Self {
        self.records.push(PendingRecord {
            tag: tag.as_ref().to_vec(),
            value: value.into(),
        });
        self
    }

    /// Append a record whose tag and value are text.
    pub fn add_text(&mut self, tag: &str, text: &str) -> &mut Self {
        self.add_record(tag, Bytes::copy_from_slice(text.as_bytes()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize all pending records into one stream.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidTag`] if a tag is not exactly 2 bytes.
    /// - [`EncodeError::ValueTooLarge`] if a value exceeds 997 bytes.
    /// - [`EncodeError::Wire`] if the underlying wire serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let total: usize = self
            .records
            .iter()
            .map(|r| HEADER_SIZE + r.value.len())
            .sum();
        let mut output = Vec::with_capacity(total);

        for (index, pending) in self.records.iter().enumerate() {
            let tag = Tag::try_from(pending.tag.as_slice()).map_err(|_| EncodeError::InvalidTag {
                index,
                len: pending.tag.len(),
            })?;
            let header = header_for(index, tag, pending.value.len())?;
            header.write_to(&mut output)?;
            output.extend_from_slice(&pending.value);
        }

        debug!(
            records = self.records.len(),
            bytes = output.len(),
            "encoded stream"
        );
        Ok(output)
    }
}

/// Serialize already-built records back into a stream.
///
/// The declared length is recomputed from each value, so a record whose
/// `length` field disagrees with its value is written consistently.
///
/// # Errors
///
/// - [`EncodeError::ValueTooLarge`] if a value exceeds 997 bytes.
/// - [`EncodeError::Wire`] if the underlying wire serialization fails.
pub fn encode_records(records: &[Record]) -> Result<Vec<u8>, EncodeError> {
    let total: usize = records.iter().map(Record::encoded_len).sum();
    let mut output = Vec::with_capacity(total);

    for (index, record) in records.iter().enumerate() {
        let header = header_for(index, record.tag, record.value.len())?;
        header.write_to(&mut output)?;
        output.extend_from_slice(&record.value);
    }

    Ok(output)
}

fn header_for(index: usize, tag: Tag, value_len: usize) -> Result<RecordHeader, EncodeError> {
    if value_len > MAX_VALUE_LEN {
        return Err(EncodeError::ValueTooLarge {
            index,
            size: value_len,
            limit: MAX_VALUE_LEN,
        });
    }
    Ok(RecordHeader::for_value(tag, value_len)?)
}
