//! Shared fixtures for the integration tests and benches.

/// A card-terminal style stream: four well-formed records followed by a
/// record that declares 446 bytes but is cut short after 83.
pub const TERMINAL_STREAM: &str = "041500360103101V00100130221262615326738433730068005100148151402300008001182V 2049830446200301D01702305140774154494006037VRV00423P 01086642V00VC0178830514077415449400699Visa";

/// Byte offset of the truncated fifth record in [`TERMINAL_STREAM`].
pub const TERMINAL_TRUNCATED_AT: usize = 84;

/// Encode `(tag, value)` pairs the way the wire format defines it:
/// `pad3(len + 2) + tag + value`, built by hand so tests do not depend
/// on the encoder under test.
pub fn frame(records: &[(&[u8; 2], &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    for (tag, value) in records {
        out.extend_from_slice(format!("{:03}", value.len() + 2).as_bytes());
        out.extend_from_slice(&tag[..]);
        out.extend_from_slice(value);
    }
    out
}
