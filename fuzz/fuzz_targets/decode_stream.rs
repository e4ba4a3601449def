#![no_main]

use libfuzzer_sys::fuzz_target;
use ltv_decoder::StreamDecoder;

// Fuzz target: StreamDecoder over arbitrary bytes.
//
// Catches bugs in:
// - Offset arithmetic near the end of the buffer
// - Cursor movement on failed steps
// - Agreement between decode_next() and decode_all()
fuzz_target!(|data: &[u8]| {
    let mut stepper = StreamDecoder::new(data.to_vec());
    let mut stepped = Vec::new();
    while stepper.has_more() {
        let before = stepper.position();
        match stepper.decode_next() {
            Ok(record) => {
                assert_eq!(stepper.position(), before + record.encoded_len());
                stepped.push(record);
            }
            Err(_) => {
                assert_eq!(stepper.position(), before);
                break;
            }
        }
        assert_eq!(stepper.position() + stepper.remaining(), data.len());
    }

    let (drained, _) = StreamDecoder::new(data.to_vec()).decode_all();
    assert_eq!(stepped, drained);
});
