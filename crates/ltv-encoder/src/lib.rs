#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;

pub use encoder::{LtvEncoder, encode_records};
pub use error::EncodeError;
