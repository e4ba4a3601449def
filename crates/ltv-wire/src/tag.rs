use std::fmt;

use crate::error::WireError;
use crate::header::TAG_SIZE;

/// The 2-byte record tag, copied verbatim from the header.
///
/// Tags are opaque: any two bytes are accepted, including non-ASCII
/// and control bytes. `Tag` is a newtype over `[u8; 2]` so it stays
/// `Copy` and cannot be built with the wrong width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag([u8; TAG_SIZE]);

impl Tag {
    pub const fn new(raw: [u8; TAG_SIZE]) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }

    /// The tag as text, if both bytes form valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl From<[u8; TAG_SIZE]> for Tag {
    fn from(raw: [u8; TAG_SIZE]) -> Self {
        Self(raw)
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = WireError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; TAG_SIZE] = raw
            .try_into()
            .map_err(|_| WireError::InvalidTag { len: raw.len() })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<&str> for Tag {
    type Error = WireError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::try_from(raw.as_bytes())
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
