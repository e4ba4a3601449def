//! Human- and machine-readable renderings of a decoded LTV stream.
//!
//! The subcommands in `main.rs` decode once into a [`Report`] and hand it
//! to one of the renderers here. Keeping rendering as plain
//! `Report -> String` functions lets the integration tests snapshot the
//! exact output without spawning the binary.

use std::fmt::Write as _;

use ltv_decoder::{DecodeError, Record, StreamDecoder, Tag, WireError};
use serde::Serialize;

/// Number of value characters shown per record by [`inspect`].
const PREVIEW_CHARS: usize = 60;

/// Everything one pass over a stream produced.
///
/// `records` pairs each record with the offset of its header. `error` is
/// the error that stopped the pass, if any; the records before it are
/// still reported.
#[derive(Debug)]
pub struct Report {
    pub records: Vec<(usize, Record)>,
    pub error: Option<DecodeError>,
    pub consumed: usize,
    pub total: usize,
}

impl Report {
    /// Decode `data` to completion, keeping the offset of every record.
    pub fn decode(data: impl Into<bytes::Bytes>) -> Self {
        let mut decoder = StreamDecoder::new(data);
        let mut records = Vec::new();
        let mut error = None;

        while decoder.has_more() {
            let offset = decoder.position();
            match decoder.decode_next() {
                Ok(record) => records.push((offset, record)),
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
        }

        Self {
            records,
            error,
            consumed: decoder.position(),
            total: decoder.as_bytes().len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Render the `ltv inspect` listing.
///
/// ```text
/// Record 0 @ 0: tag="01" length=7 (5 bytes)
///          Value: Hello
/// Record 1 @ 10: tag="02" length=7 (5 bytes)
///          Value: World
/// ---
/// 2 records, 20 of 20 bytes consumed
/// ```
///
/// A stopped pass ends with a `✗` line naming the error.
pub fn inspect(report: &Report, show_hex: bool) -> String {
    let mut out = String::new();

    for (idx, (offset, record)) in report.records.iter().enumerate() {
        let _ = writeln!(
            out,
            "Record {idx} @ {offset}: tag={:?} length={} ({} bytes)",
            record.tag.to_string(),
            record.length,
            record.value_len()
        );

        let value = String::from_utf8_lossy(&record.value);
        let preview: String = value.chars().take(PREVIEW_CHARS).collect();
        let ellipsis = if value.chars().count() > PREVIEW_CHARS {
            "…"
        } else {
            ""
        };
        let _ = writeln!(out, "         Value: {preview}{ellipsis}");

        if show_hex {
            hex_dump(&mut out, &record.value);
        }
    }

    let _ = writeln!(out, "---");
    let n = report.records.len();
    let _ = writeln!(
        out,
        "{n} record{}, {} of {} bytes consumed",
        if n == 1 { "" } else { "s" },
        report.consumed,
        report.total
    );
    if let Some(e) = &report.error {
        let _ = writeln!(out, "✗ {e}");
    }

    out
}

fn hex_dump(out: &mut String, raw: &[u8]) {
    let _ = writeln!(out, "         Hex dump:");
    for (i, chunk) in raw.chunks(16).enumerate() {
        let offset = i * 16;
        let hex = chunk
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        let _ = writeln!(out, "           {offset:04x}  {hex:<48}  {ascii}");
    }
}

/// Render records as `tag<TAB>value` lines.
///
/// Values are decoded lossily. Tags that are not UTF-8 are written as
/// `\xNN` escapes so distinct binary tags stay distinct.
pub fn text(report: &Report) -> String {
    let mut out = String::new();
    for (_, record) in &report.records {
        let _ = writeln!(
            out,
            "{}\t{}",
            tag_text(&record.tag),
            String::from_utf8_lossy(&record.value)
        );
    }
    out
}

fn tag_text(tag: &Tag) -> String {
    match tag.as_str() {
        Some(s) => s.to_string(),
        None => tag.as_bytes().escape_ascii().to_string(),
    }
}

/// One record in the JSON output of `ltv decode --format json`.
///
/// Tags and values that are not valid UTF-8 are hex-encoded and marked
/// with `"tag_encoding": "hex"` and `"encoding": "hex"` respectively.
#[derive(Debug, Serialize)]
pub struct JsonRecord {
    pub offset: usize,
    pub length: u16,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_encoding: Option<&'static str>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<&'static str>,
}

impl JsonRecord {
    fn new(offset: usize, record: &Record) -> Self {
        let (tag, tag_encoding) = match record.tag.as_str() {
            Some(s) => (s.to_string(), None),
            None => (hex::encode(record.tag.as_bytes()), Some("hex")),
        };
        let (value, encoding) = match record.value_str() {
            Ok(s) => (s.to_string(), None),
            Err(_) => (hex::encode(&record.value), Some("hex")),
        };
        Self {
            offset,
            length: record.length,
            tag,
            tag_encoding,
            value,
            encoding,
        }
    }
}

/// Render records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns the serializer error if JSON encoding fails.
pub fn json(report: &Report) -> serde_json::Result<String> {
    let records: Vec<JsonRecord> = report
        .records
        .iter()
        .map(|(offset, record)| JsonRecord::new(*offset, record))
        .collect();
    serde_json::to_string_pretty(&records)
}

/// One-line diagnostic for `ltv validate`.
///
/// ```text
/// ┌──────────────────┬────────────────────────────────────────────┐
/// │ Variant          │ Diagnostic                                 │
/// ├──────────────────┼────────────────────────────────────────────┤
/// │ TruncatedHeader  │ "trailing N bytes at offset X ..."         │
/// │ MalformedLength  │ "bad length field \"ABC\" at offset X ..." │
/// │ everything else  │ "<error Display>"                          │
/// └──────────────────┴────────────────────────────────────────────┘
/// ```
pub fn diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::Wire(WireError::TruncatedHeader {
            offset,
            available,
            required,
        }) => format!(
            "trailing {available} byte{} at offset {offset} cannot hold a {required}-byte header",
            if *available == 1 { "" } else { "s" }
        ),
        DecodeError::Wire(WireError::MalformedLength { offset, raw }) => {
            format!("bad length field {raw:?} at offset {offset} (expected 3 ASCII digits)")
        }
        other => other.to_string(),
    }
}
