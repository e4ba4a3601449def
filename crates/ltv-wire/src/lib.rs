#![warn(clippy::pedantic)]

pub mod error;
pub mod header;
pub mod record;
pub mod tag;

pub use error::WireError;
pub use header::{
    HEADER_SIZE, LENGTH_FIELD_SIZE, MAX_DECLARED_LENGTH, MAX_VALUE_LEN, MIN_DECLARED_LENGTH,
    RecordHeader, TAG_SIZE,
};
pub use record::Record;
pub use tag::Tag;
