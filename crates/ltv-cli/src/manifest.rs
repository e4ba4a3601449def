//! JSON manifest format accepted by `ltv encode`.
//!
//! ```json
//! {
//!   "records": [
//!     { "tag": "01", "value": "Hello" },
//!     { "tag": "02", "value_hex": "ff00" }
//!   ]
//! }
//! ```
//!
//! Each record carries exactly one of `value` (UTF-8 text) or
//! `value_hex` (raw bytes as hex).

use anyhow::{Context, Result, bail};
use ltv_encoder::LtvEncoder;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub records: Vec<ManifestRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestRecord {
    pub tag: String,
    pub value: Option<String>,
    pub value_hex: Option<String>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the manifest shape.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid manifest JSON")
    }

    /// Encode every manifest record into one LTV stream.
    ///
    /// # Errors
    ///
    /// Returns an error if a record has both or neither value fields,
    /// bad hex, a tag that is not 2 bytes, or a value over 997 bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut encoder = LtvEncoder::new();

        for (idx, record) in self.records.iter().enumerate() {
            let value = match (&record.value, &record.value_hex) {
                (Some(text), None) => text.clone().into_bytes(),
                (None, Some(raw)) => hex::decode(raw)
                    .with_context(|| format!("record {idx}: invalid value_hex"))?,
                (Some(_), Some(_)) => bail!("record {idx}: set only one of value or value_hex"),
                (None, None) => bail!("record {idx}: missing value or value_hex"),
            };
            encoder.add_record(record.tag.as_bytes(), value);
        }

        Ok(encoder.encode()?)
    }
}
