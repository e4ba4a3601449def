#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: RecordHeader::read_from with arbitrary bytes and offset.
//
// Catches bugs in:
// - Length field digit validation
// - Offsets at or past the end of the buffer
fuzz_target!(|input: (Vec<u8>, u16)| {
    let (data, offset) = input;
    if let Ok(header) = ltv_wire::RecordHeader::read_from(&data, usize::from(offset)) {
        assert!(header.length >= ltv_wire::MIN_DECLARED_LENGTH);
        assert!(header.length <= ltv_wire::MAX_DECLARED_LENGTH);
    }
});
