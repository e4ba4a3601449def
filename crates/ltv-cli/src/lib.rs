#![warn(clippy::pedantic)]

pub mod input;
pub mod logging;
pub mod manifest;
pub mod render;

pub use render::Report;
