//! Process-wide default generator.
//!
//! The default generator is created on first use with random region and
//! machine tags and reads the wall clock. Everything here is a thin wrapper
//! around a shared [`AtomicIdentifierGenerator`]; code that wants controlled
//! seeds or a mock clock should own its own generator instead.
//!
//! # Example
//! ```rust
//! use tickid::{Identifier, global};
//!
//! global().set_region(3).unwrap();
//! let id = Identifier::now();
//! assert_eq!(id.region(), 3);
//! ```

use crate::{AtomicIdentifierGenerator, Identifier, SystemClock};
use std::sync::LazyLock;

static GLOBAL_GENERATOR: LazyLock<AtomicIdentifierGenerator<SystemClock>> =
    LazyLock::new(|| AtomicIdentifierGenerator::new(SystemClock));

/// Returns the process-wide default generator.
///
/// Use it to read or adjust the region, machine, and counter that
/// [`Identifier::now`] and [`next_id`] stamp on new identifiers.
pub fn global() -> &'static AtomicIdentifierGenerator<SystemClock> {
    &GLOBAL_GENERATOR
}

/// Generates an identifier from the process-wide default generator.
#[must_use]
pub fn next_id() -> Identifier {
    GLOBAL_GENERATOR.next_id()
}
