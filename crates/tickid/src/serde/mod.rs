//! Serde support for [`Identifier`](crate::Identifier).
//!
//! The [`Serialize`](serde::Serialize) and [`Deserialize`](serde::Deserialize)
//! impls pick a representation from the format: human readable formats get the
//! 16 character compact string, binary formats get the 12 raw bytes. The
//! modules below pin one representation regardless of format and are meant to
//! be used with `#[serde(with = "...")]`.

mod identifier;

pub use identifier::*;
