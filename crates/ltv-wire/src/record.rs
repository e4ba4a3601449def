use bytes::Bytes;

use crate::error::WireError;
use crate::header::{HEADER_SIZE, RecordHeader};
use crate::tag::Tag;

/// One decoded Length-Tag-Value record.
///
/// `length` is the declared length exactly as it appeared on the wire,
/// which counts the 2 tag bytes. The value therefore always holds
/// `length - 2` bytes.
///
/// `value` is a [`Bytes`] handle into the decoder's buffer: slicing it
/// out of the stream bumps a reference count instead of copying.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub length: u16,
    pub tag: Tag,
    pub value: Bytes,
}

impl Record {
    /// Build a record from a tag and value, computing the declared length.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::LengthOverflow`] if the value is longer than
    /// [`MAX_VALUE_LEN`](crate::MAX_VALUE_LEN).
    pub fn new(tag: Tag, value: impl Into<Bytes>) -> Result<Self, WireError> {
        let value = value.into();
        let header = RecordHeader::for_value(tag, value.len())?;
        Ok(Self {
            length: header.length,
            tag,
            value,
        })
    }

    pub fn header(&self) -> RecordHeader {
        RecordHeader {
            length: self.length,
            tag: self.tag,
        }
    }

    pub fn value_len(&self) -> usize {
        self.value.len()
    }

    /// Bytes this record occupies on the wire (header + value).
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.value.len()
    }

    /// The value as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error if the value is not valid text.
    pub fn value_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.value)
    }

    /// Write header and value to `w`.
    ///
    /// `length` must be exactly `value.len() + 2`; nothing is written
    /// otherwise.
    ///
    /// # Returns
    ///
    /// Total number of bytes written.
    ///
    /// # Errors
    ///
    /// - [`WireError::LengthOverflow`] if the value is longer than 997 bytes.
    /// - [`WireError::LengthMismatch`] if `length` does not match the value.
    /// - [`WireError::Io`] if the writer fails.
    pub fn write_to(&self, w: &mut impl std::io::Write) -> Result<usize, WireError> {
        let header = RecordHeader::for_value(self.tag, self.value.len())?;
        if header.length != self.length {
            return Err(WireError::LengthMismatch {
                length: self.length,
                value_len: self.value.len(),
            });
        }
        let n = header.write_to(w)?;
        w.write_all(&self.value)?;
        Ok(n + self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_VALUE_LEN;

    #[test]
    fn new_computes_declared_length() {
        let record = Record::new(Tag::new(*b"01"), &b"Hello"[..]).unwrap();
        assert_eq!(record.length, 7);
        assert_eq!(record.value_len(), 5);
        assert_eq!(record.encoded_len(), 10);
        assert_eq!(record.value_str().unwrap(), "Hello");
    }

    #[test]
    fn write_emits_wire_bytes() {
        let record = Record::new(Tag::new(*b"02"), "World").unwrap();
        let mut buf = Vec::new();
        let n = record.write_to(&mut buf).unwrap();
        assert_eq!(n, 10);
        assert_eq!(buf, b"00702World");
    }

    #[test]
    fn write_rejects_inconsistent_length() {
        for length in [0u16, 4, 6] {
            let record = Record {
                length,
                tag: Tag::new(*b"AB"),
                value: Bytes::from_static(b"xyz"),
            };
            let mut buf = Vec::new();
            let result = record.write_to(&mut buf);
            assert!(
                matches!(
                    result,
                    Err(WireError::LengthMismatch { length: l, value_len: 3 }) if l == length
                ),
                "length {length}: {result:?}"
            );
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn empty_value_writes_minimum_length() {
        let record = Record::new(Tag::new(*b"ZZ"), Bytes::new()).unwrap();
        let mut buf = Vec::new();
        record.write_to(&mut buf).unwrap();
        assert_eq!(buf, b"002ZZ");
    }

    #[test]
    fn largest_value_fits() {
        let record = Record::new(Tag::new(*b"01"), vec![b'x'; MAX_VALUE_LEN]).unwrap();
        assert_eq!(record.length, 999);
        assert!(Record::new(Tag::new(*b"01"), vec![b'x'; MAX_VALUE_LEN + 1]).is_err());
    }

    #[test]
    fn non_utf8_value_is_reported() {
        let record = Record::new(Tag::new(*b"01"), vec![0xFF, 0xFE]).unwrap();
        assert!(record.value_str().is_err());
    }
}
