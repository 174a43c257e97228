//! 96-bit identifiers stamped with a 100 nanosecond tick, a region, a machine
//! tag, and a rolling counter.
//!
//! Identifiers serialize to 12 big-endian bytes and render as either 24 hex
//! characters or 16 characters from the URL-safe alphabet `0-9a-zA-Z-_`.
//!
//! ```
//! use tickid::{AtomicIdentifierGenerator, Identifier, SystemClock};
//!
//! let generator = AtomicIdentifierGenerator::from_components(7, 300, 0, SystemClock);
//! let id = generator.next_id();
//! let compact = id.to_compact();
//! assert_eq!(compact.len(), 16);
//! assert_eq!(Identifier::parse(&compact), Some(id));
//! assert_eq!(Identifier::parse(&id.to_hex()), Some(id));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
mod error;
pub mod generator;
pub mod id;
pub mod rand;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub mod serde;
pub mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
