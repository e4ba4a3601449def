#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ltv_encoder::LtvEncoder;

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    tag: [u8; 2],
    value: Vec<u8>,
}

// Fuzz target: LtvEncoder → StreamDecoder roundtrip.
//
// Values longer than the 3-digit length field allows are truncated to
// the limit so every input produces a valid stream.
fuzz_target!(|records: Vec<FuzzRecord>| {
    let mut enc = LtvEncoder::new();
    for r in &records {
        let len = r.value.len().min(ltv_wire::MAX_VALUE_LEN);
        enc.add_record(r.tag, r.value[..len].to_vec());
    }
    let payload = enc.encode().unwrap();

    let (decoded, err) = ltv_decoder::parse_bytes(payload);
    assert!(err.is_none());
    assert_eq!(decoded.len(), records.len());
    for (got, want) in decoded.iter().zip(&records) {
        let len = want.value.len().min(ltv_wire::MAX_VALUE_LEN);
        assert_eq!(got.tag.as_bytes(), &want.tag);
        assert_eq!(&got.value[..], &want.value[..len]);
    }
});
