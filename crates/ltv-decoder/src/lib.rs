#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;

pub use decoder::{Records, StreamDecoder, parse_bytes, parse_str};
pub use error::DecodeError;
pub use ltv_wire::{Record, Tag, WireError};
