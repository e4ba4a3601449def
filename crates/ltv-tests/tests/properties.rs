//! Property tests for the framing invariants.
//!
//! - Any list of 2-byte tags and values up to 997 bytes survives
//!   `pad3(len + 2) + tag + value` framing and decoding unchanged.
//! - `reset()` replays a pass identically.
//! - After every successful step `position() + remaining()` is the buffer
//!   length and the cursor advanced by exactly `5 + (length - 2)`.
//! - Arbitrary bytes never panic, and a failed step never moves the cursor.

use ltv_decoder::{DecodeError, StreamDecoder};
use ltv_wire::{HEADER_SIZE, MAX_VALUE_LEN};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = ([u8; 2], Vec<u8>)> {
    (
        any::<[u8; 2]>(),
        prop::collection::vec(any::<u8>(), 0..=MAX_VALUE_LEN),
    )
}

fn stream_strategy() -> impl Strategy<Value = Vec<([u8; 2], Vec<u8>)>> {
    prop::collection::vec(record_strategy(), 0..12)
}

fn frame_all(records: &[([u8; 2], Vec<u8>)]) -> Vec<u8> {
    let borrowed: Vec<(&[u8; 2], &[u8])> = records
        .iter()
        .map(|(tag, value)| (tag, value.as_slice()))
        .collect();
    ltv_tests::frame(&borrowed)
}

proptest! {
    #[test]
    fn framing_roundtrips(records in stream_strategy()) {
        let stream = frame_all(&records);
        let mut decoder = StreamDecoder::new(stream);
        let (decoded, err) = decoder.decode_all();

        prop_assert!(err.is_none());
        prop_assert_eq!(decoded.len(), records.len());
        for (got, (tag, value)) in decoded.iter().zip(&records) {
            prop_assert_eq!(got.tag.as_bytes(), tag);
            prop_assert_eq!(&got.value[..], value.as_slice());
            prop_assert_eq!(usize::from(got.length), value.len() + 2);
        }
        prop_assert!(!decoder.has_more());
    }

    #[test]
    fn encoder_agrees_with_hand_framing(records in stream_strategy()) {
        let mut enc = ltv_encoder::LtvEncoder::new();
        for (tag, value) in &records {
            enc.add_record(*tag, value.clone());
        }
        prop_assert_eq!(enc.encode().unwrap(), frame_all(&records));
    }

    #[test]
    fn reset_is_idempotent(records in stream_strategy(), junk in prop::collection::vec(any::<u8>(), 0..8)) {
        let mut stream = frame_all(&records);
        stream.extend_from_slice(&junk);

        let mut decoder = StreamDecoder::new(stream);
        let (first, err1) = decoder.decode_all();
        let stop1 = decoder.position();
        decoder.reset();
        prop_assert_eq!(decoder.position(), 0);
        let (second, err2) = decoder.decode_all();

        prop_assert_eq!(first, second);
        prop_assert_eq!(stop1, decoder.position());
        prop_assert_eq!(err1.map(|e| e.to_string()), err2.map(|e| e.to_string()));
    }

    #[test]
    fn cursor_accounting(records in stream_strategy()) {
        let stream = frame_all(&records);
        let total = stream.len();
        let mut decoder = StreamDecoder::new(stream);

        while decoder.has_more() {
            let before = decoder.position();
            let record = decoder.decode_next().unwrap();
            prop_assert_eq!(decoder.position() + decoder.remaining(), total);
            prop_assert_eq!(
                decoder.position() - before,
                HEADER_SIZE + usize::from(record.length) - 2
            );
        }
        prop_assert!(decoder.decode_next().unwrap_err().is_end_of_stream());
    }

    #[test]
    fn arbitrary_bytes_never_move_cursor_on_failure(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let total = data.len();
        let mut decoder = StreamDecoder::new(data);

        loop {
            let before = decoder.position();
            match decoder.decode_next() {
                Ok(record) => {
                    prop_assert_eq!(decoder.position(), before + record.encoded_len());
                }
                Err(DecodeError::EndOfStream) => {
                    prop_assert_eq!(before, total);
                    break;
                }
                Err(_) => {
                    prop_assert_eq!(decoder.position(), before);
                    break;
                }
            }
        }
        prop_assert!(decoder.position() <= total);
    }
}
