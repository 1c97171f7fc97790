//! Error types raised by the parsing engine and the bundled token buffer.
//!
//! This module defines:
//!
//! - The `Error` structure carrying a source position
//! - `ErrorImpl`, the specific error variants
//! - `ErrorTip`, a human-readable suggestion used when rendering errors

pub mod errors;

#[cfg(test)]
mod tests;
