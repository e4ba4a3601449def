use bytes::Bytes;
use ltv_wire::{HEADER_SIZE, Record, RecordHeader};
use tracing::{debug, trace};

use crate::error::DecodeError;

/// Cursor-driven LTV decoder over one immutable buffer.
///
/// The decoder owns the input as [`Bytes`] and a single cursor. Each
/// call to [`decode_next`](Self::decode_next) either consumes exactly
/// one record or fails without moving the cursor, so the cursor never
/// lands in the middle of a record.
///
/// ```text
///   buffer:  00701Hello00702World
///            ^         ^         ^
///   cursor:  0         10        20 (end, has_more() == false)
/// ```
///
/// Values are slices of the owned buffer, so decoding never copies
/// payload bytes. Cloning a decoder is cheap and gives an independent
/// cursor over the same bytes.
///
/// # Example
///
/// ```rust
/// use ltv_decoder::StreamDecoder;
///
/// let mut decoder = StreamDecoder::from_text("00701Hello00702World");
/// let first = decoder.decode_next().unwrap();
/// assert_eq!(first.tag, "01");
/// assert_eq!(&first.value[..], b"Hello");
/// assert_eq!(decoder.position(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct StreamDecoder {
    data: Bytes,
    pos: usize,
}

impl StreamDecoder {
    /// Create a decoder over `data` with the cursor at 0.
    ///
    /// Never fails: validation happens record by record at decode time.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Create a decoder over the UTF-8 bytes of `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(Bytes::copy_from_slice(text.as_bytes()))
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Move the cursor back to the start of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// The whole input buffer, independent of the cursor.
    pub fn as_bytes(&self) -> &Bytes {
        &self.data
    }

    /// Decode the record at the cursor and advance past it.
    ///
    /// The header is validated before the value bounds are checked, and
    /// the cursor is only committed once the whole record is known to be
    /// present.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EndOfStream`] if the cursor is at the end.
    /// - [`DecodeError::Wire`] with `TruncatedHeader`, `MalformedLength`
    ///   or `LengthTooSmall` if the 5-byte header is bad.
    /// - [`DecodeError::TruncatedValue`] if the value runs past the end.
    ///
    /// On any error the cursor is left where it was.
    pub fn decode_next(&mut self) -> Result<Record, DecodeError> {
        if !self.has_more() {
            return Err(DecodeError::EndOfStream);
        }

        let start = self.pos;
        let header = RecordHeader::read_from(&self.data, start).inspect_err(|e| {
            debug!(offset = start, error = %e, "invalid record header");
        })?;

        let value_start = start + HEADER_SIZE;
        let value_len = header.value_len();
        let available = self.data.len() - value_start;
        if value_len > available {
            debug!(
                offset = start,
                needed = value_len,
                available,
                "record value truncated"
            );
            return Err(DecodeError::TruncatedValue {
                offset: start,
                needed: value_len,
                available,
            });
        }

        let value_end = value_start + value_len;
        let value = self.data.slice(value_start..value_end);
        self.pos = value_end;

        trace!(
            offset = start,
            length = header.length,
            tag = %header.tag,
            "decoded record"
        );

        Ok(Record {
            length: header.length,
            tag: header.tag,
            value,
        })
    }

    /// Decode every remaining record.
    ///
    /// Stops at the first error and returns it together with the records
    /// decoded before it. Reaching the end of the buffer is the only clean
    /// stop, and yields `None` for the error.
    pub fn decode_all(&mut self) -> (Vec<Record>, Option<DecodeError>) {
        let mut records = Vec::new();

        while self.has_more() {
            match self.decode_next() {
                Ok(record) => records.push(record),
                Err(e) => {
                    debug!(
                        decoded = records.len(),
                        offset = self.pos,
                        "decode stopped early"
                    );
                    return (records, Some(e));
                }
            }
        }

        debug!(decoded = records.len(), "decode complete");
        (records, None)
    }

    /// Iterate over the remaining records.
    ///
    /// Yields `Ok` for each record, then at most one `Err`, then `None`.
    pub fn records(&mut self) -> Records<'_> {
        Records {
            decoder: self,
            failed: false,
        }
    }
}

impl From<Bytes> for StreamDecoder {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for StreamDecoder {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<String> for StreamDecoder {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for StreamDecoder {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Iterator returned by [`StreamDecoder::records`].
#[derive(Debug)]
pub struct Records<'a> {
    decoder: &'a mut StreamDecoder,
    failed: bool,
}

impl Iterator for Records<'_> {
    type Item = Result<Record, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.decoder.has_more() {
            return None;
        }
        let result = self.decoder.decode_next();
        self.failed = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for Records<'_> {}

/// Decode all records from a byte buffer in one call.
///
/// Same partial-success contract as [`StreamDecoder::decode_all`].
pub fn parse_bytes(data: impl Into<Bytes>) -> (Vec<Record>, Option<DecodeError>) {
    StreamDecoder::new(data).decode_all()
}

/// Decode all records from text in one call.
pub fn parse_str(text: &str) -> (Vec<Record>, Option<DecodeError>) {
    StreamDecoder::from_text(text).decode_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltv_wire::{Tag, WireError};

    #[test]
    fn decodes_two_records_in_order() {
        let mut decoder = StreamDecoder::from_text("00701Hello00702World");
        assert!(decoder.has_more());

        let first = decoder.decode_next().unwrap();
        assert_eq!(first.length, 7);
        assert_eq!(first.tag, Tag::new(*b"01"));
        assert_eq!(&first.value[..], b"Hello");
        assert_eq!(decoder.position(), 10);

        let second = decoder.decode_next().unwrap();
        assert_eq!(second.length, 7);
        assert_eq!(second.tag, "02");
        assert_eq!(&second.value[..], b"World");

        assert!(!decoder.has_more());
        assert_eq!(decoder.position(), 20);
        assert_eq!(decoder.remaining(), 0);
    }

    #[test]
    fn end_of_stream_after_last_record() {
        let mut decoder = StreamDecoder::from_text("00701Hello");
        decoder.decode_next().unwrap();
        assert!(matches!(
            decoder.decode_next(),
            Err(DecodeError::EndOfStream)
        ));
    }

    #[test]
    fn empty_input_is_end_of_stream() {
        let mut decoder = StreamDecoder::new(Vec::new());
        assert!(!decoder.has_more());
        assert!(decoder.decode_next().unwrap_err().is_end_of_stream());

        let (records, err) = decoder.decode_all();
        assert!(records.is_empty());
        assert!(err.is_none());
    }

    #[test]
    fn truncated_header_reports_counts() {
        let mut decoder = StreamDecoder::from_text("123");
        let err = decoder.decode_next().unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Wire(WireError::TruncatedHeader {
                offset: 0,
                available: 3,
                required: 5
            })
        ));
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn malformed_length_carries_raw_text() {
        let mut decoder = StreamDecoder::from_text("ABC01data");
        match decoder.decode_next() {
            Err(DecodeError::Wire(WireError::MalformedLength { raw, .. })) => {
                assert_eq!(raw, "ABC");
            }
            other => panic!("expected MalformedLength, got {other:?}"),
        }
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn truncated_value_reports_needed_and_available() {
        let mut decoder = StreamDecoder::from_text("10001");
        let err = decoder.decode_next().unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TruncatedValue {
                offset: 0,
                needed: 98,
                available: 0
            }
        ));
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn minimum_length_yields_empty_value() {
        let mut decoder = StreamDecoder::from_text("002AB");
        let record = decoder.decode_next().unwrap();
        assert_eq!(record.length, 2);
        assert!(record.value.is_empty());
        assert_eq!(decoder.position(), 5);
    }

    #[test]
    fn length_below_two_leaves_cursor() {
        for input in ["001ABxyz", "000AB"] {
            let mut decoder = StreamDecoder::from_text(input);
            let err = decoder.decode_next().unwrap_err();
            assert!(
                matches!(err, DecodeError::Wire(WireError::LengthTooSmall { .. })),
                "unexpected error for {input:?}: {err:?}"
            );
            assert_eq!(decoder.position(), 0);
        }
    }

    #[test]
    fn failed_step_does_not_move_cursor_mid_stream() {
        let mut decoder = StreamDecoder::from_text("00701Hello00902Wor");
        decoder.decode_next().unwrap();
        assert_eq!(decoder.position(), 10);
        assert!(decoder.decode_next().is_err());
        assert_eq!(decoder.position(), 10);
        assert_eq!(decoder.remaining(), 8);
    }

    #[test]
    fn decode_all_returns_partial_progress() {
        let (records, err) = parse_str("00701Hello00902Wor");
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0].value[..], b"Hello");
        assert!(matches!(
            err,
            Some(DecodeError::TruncatedValue {
                offset: 10,
                needed: 7,
                available: 3
            })
        ));
    }

    #[test]
    fn reset_replays_identically() {
        let mut decoder = StreamDecoder::from_text("00701Hello00702World");
        let (first, err1) = decoder.decode_all();
        decoder.reset();
        assert_eq!(decoder.position(), 0);
        let (second, err2) = decoder.decode_all();
        assert_eq!(first, second);
        assert!(err1.is_none() && err2.is_none());
    }

    #[test]
    fn tag_bytes_are_not_validated() {
        let mut decoder = StreamDecoder::new(b"003\xFF\x00!".to_vec());
        let record = decoder.decode_next().unwrap();
        assert_eq!(record.tag.as_bytes(), &[0xFF, 0x00]);
        assert_eq!(&record.value[..], b"!");
    }

    #[test]
    fn value_is_a_view_of_the_buffer() {
        let data = Bytes::from_static(b"00701Hello");
        let mut decoder = StreamDecoder::new(data.clone());
        let record = decoder.decode_next().unwrap();
        assert_eq!(record.value.as_ptr(), data[5..].as_ptr());
    }

    #[test]
    fn records_iterator_stops_after_error() {
        let mut decoder = StreamDecoder::from_text("00701HelloXYZ");
        let items: Vec<_> = decoder.records().collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(
            items[1],
            Err(DecodeError::Wire(WireError::TruncatedHeader { offset: 10, .. }))
        ));
    }

    #[test]
    fn cloned_decoders_have_independent_cursors() {
        let mut a = StreamDecoder::from("00701Hello00702World");
        let mut b = a.clone();
        a.decode_next().unwrap();
        assert_eq!(a.position(), 10);
        assert_eq!(b.position(), 0);
        assert_eq!(b.decode_next().unwrap().tag, "01");
    }

    #[test]
    fn decodes_encoder_output() {
        let mut enc = ltv_encoder::LtvEncoder::new();
        enc.add_text("50", "0360103101V")
            .add_record(Tag::new(*b"V "), &b""[..])
            .add_text("99", "Visa");
        let payload = enc.encode().unwrap();

        let (records, err) = parse_bytes(payload);
        assert!(err.is_none());
        let tags: Vec<String> = records.iter().map(|r| r.tag.to_string()).collect();
        assert_eq!(tags, ["50", "V ", "99"]);
        assert_eq!(records[2].value_str().unwrap(), "Visa");
    }

    #[test]
    fn decoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StreamDecoder>();
    }
}
