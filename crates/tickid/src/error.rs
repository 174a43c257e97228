use core::fmt;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The administrative field an [`Error::OutOfRange`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The 8-bit region tag.
    Region,
    /// The machine tag, bounded to `0..=512`.
    Machine,
    /// The rolling counter, given in its `0..=255` view.
    Counter,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => f.write_str("region"),
            Self::Machine => f.write_str("machine"),
            Self::Counter => f.write_str("counter"),
        }
    }
}

/// All errors that `tickid` can produce.
///
/// These are invalid-argument failures: malformed fixed-length text handed to
/// the strict codec helpers, or an out-of-bound value handed to a generator
/// setter. The lenient entry points ([`Identifier::parse`] and
/// [`Identifier::from_bytes`]) never return them and yield `None` instead.
///
/// [`Identifier::parse`]: crate::Identifier::parse
/// [`Identifier::from_bytes`]: crate::Identifier::from_bytes
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input does not have the fixed length the encoding requires.
    #[error("invalid length: expected {expected}, got {len}")]
    InvalidLength {
        /// The required length.
        expected: usize,
        /// The length that was supplied.
        len: usize,
    },

    /// Identifier text is neither 16 (compact) nor 24 (hex) characters long.
    #[error("invalid identifier length: expected 16 or 24, got {len}")]
    InvalidTextLength {
        /// The length that was supplied.
        len: usize,
    },

    /// The input contains a symbol outside the encoding's alphabet.
    #[error("invalid character {ch:?} at index {index}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character within the input.
        index: usize,
    },

    /// A setter was called with a value outside the field's accepted range.
    /// The previous value is left untouched.
    #[error("{field} out of range: {value} not in {min}..={max}")]
    OutOfRange {
        /// The setter that rejected the value.
        field: Field,
        /// The value that was supplied.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
}
