use crate::{
    Error, Result, Tick,
    codec::{
        self, BYTE_LEN, COMPACT_LEN, HEX_LEN, decode_compact, decode_hex, encode_compact,
        encode_hex,
    },
};
use chrono::{DateTime, Utc};
use core::{cmp::Ordering, fmt, str::FromStr};

/// A 96-bit, time-ordered identifier in the spirit of a BSON ObjectId.
///
/// - 64 bits [`Tick`] (100ns since 0001-01-01, kind flag in the top 2 bits)
/// - 8 bits region
/// - 16 bits machine
/// - 8 bits counter
///
/// ```text
///  Byte Index:  0          7   8            9        10   11
///              +------------+------------+--------------+-------------+
///  Field:      | tick (64)  | region (8) | machine (16) | counter (8) |
///              +------------+------------+--------------+-------------+
///              |<---------- big-endian ------ 12 bytes ------------->|
/// ```
///
/// Identifiers are plain values: they never change once built and are freely
/// copied between threads. Equality and hashing cover all four fields.
///
/// `Ord` compares the raw tick (signed, kind flag included), then region,
/// machine, and counter. For UTC-tagged ticks this is the same order as
/// comparing [`Identifier::to_bytes`] lexicographically. See
/// [`Identifier::cmp_by_instant`] to ignore the kind flag.
///
/// # Example
///
/// ```
/// use tickid::{Identifier, Tick};
///
/// let id = Identifier::from_components(Tick::from_raw(0x4000_0000_0000_0001), 7, 300, -1);
/// assert_eq!(id.to_hex(), "400000000000000107012cff");
/// assert_eq!(Identifier::parse(&id.to_compact()), Some(id));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    tick: Tick,
    region: u8,
    machine: u16,
    counter: i8,
}

impl Identifier {
    /// Size of the binary form in bytes.
    pub const SIZE: usize = BYTE_LEN;

    /// Builds an identifier from its four fields.
    #[must_use]
    pub const fn from_components(tick: Tick, region: u8, machine: u16, counter: i8) -> Self {
        Self {
            tick,
            region,
            machine,
            counter,
        }
    }

    /// Creates a new identifier from the process-wide default generator.
    ///
    /// See [`global`](crate::global) to adjust its region, machine, or
    /// counter.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    #[must_use]
    pub fn now() -> Self {
        crate::next_id()
    }

    /// Returns the tick this identifier was created at.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Returns the raw tick value, kind flag included.
    #[must_use]
    pub const fn raw_tick(&self) -> i64 {
        self.tick.to_raw()
    }

    /// Returns the decoded creation instant. The kind flag is ignored.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.tick.to_datetime()
    }

    #[must_use]
    pub const fn region(&self) -> u8 {
        self.region
    }

    #[must_use]
    pub const fn machine(&self) -> u16 {
        self.machine
    }

    /// Returns the counter as the rolling `0..=255` value.
    #[must_use]
    pub const fn counter(&self) -> u8 {
        self.counter as u8
    }

    /// Returns the counter as stored, in the signed `-127..=127` wrap range.
    #[must_use]
    pub const fn raw_counter(&self) -> i8 {
        self.counter
    }

    /// Encodes the identifier as 12 big-endian bytes:
    /// `tick:i64 | region:u8 | machine:u16 | counter:i8`.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; BYTE_LEN] {
        let tick = self.tick.to_raw().to_be_bytes();
        let machine = self.machine.to_be_bytes();
        [
            tick[0],
            tick[1],
            tick[2],
            tick[3],
            tick[4],
            tick[5],
            tick[6],
            tick[7],
            self.region,
            machine[0],
            machine[1],
            self.counter as u8,
        ]
    }

    /// Decodes 12 big-endian bytes. Every byte pattern is a valid identifier.
    #[must_use]
    pub const fn from_byte_array(bytes: [u8; BYTE_LEN]) -> Self {
        let tick = i64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        Self {
            tick: Tick::from_raw(tick),
            region: bytes[8],
            machine: u16::from_be_bytes([bytes[9], bytes[10]]),
            counter: bytes[11] as i8,
        }
    }

    /// Decodes a byte slice, returning `None` unless it is exactly 12 bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        <[u8; BYTE_LEN]>::try_from(bytes)
            .ok()
            .map(Self::from_byte_array)
    }

    /// Encodes the identifier as 24 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut buf = [0_u8; HEX_LEN];
        self.encode_hex_to_buf(&mut buf).to_owned()
    }

    /// Zero-allocation variant of [`Identifier::to_hex`].
    ///
    /// ```
    /// use tickid::{Identifier, Tick, codec::HEX_LEN};
    ///
    /// let id = Identifier::from_components(Tick::from_raw(0), 0, 0, 1);
    /// let mut buf = [0_u8; HEX_LEN];
    /// assert_eq!(id.encode_hex_to_buf(&mut buf), "000000000000000000000001");
    /// ```
    pub fn encode_hex_to_buf<'a>(&self, buf: &'a mut [u8; HEX_LEN]) -> &'a str {
        encode_hex(&self.to_bytes(), buf);
        // SAFETY: the hex alphabet is ASCII.
        unsafe { core::str::from_utf8_unchecked(buf) }
    }

    /// Encodes the identifier as 16 compact characters from
    /// [`codec::COMPACT_ALPHABET`].
    #[must_use]
    pub fn to_compact(&self) -> String {
        let mut buf = [0_u8; COMPACT_LEN];
        self.encode_compact_to_buf(&mut buf).to_owned()
    }

    /// Zero-allocation variant of [`Identifier::to_compact`].
    pub fn encode_compact_to_buf<'a>(&self, buf: &'a mut [u8; COMPACT_LEN]) -> &'a str {
        encode_compact(&self.to_bytes(), buf);
        // SAFETY: the compact alphabet is ASCII.
        unsafe { core::str::from_utf8_unchecked(buf) }
    }

    /// Parses either text form, returning `None` for anything malformed.
    ///
    /// A 16-character input is read as the compact form and a 24-character
    /// input as hex (either case). Wrong lengths and foreign symbols yield
    /// `None`, so untrusted input can be branched on directly. Use
    /// [`Identifier::try_parse`] to learn why parsing failed.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::try_parse(s).ok()
    }

    /// Strict counterpart of [`Identifier::parse`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTextLength`] if the input is neither 16 nor 24 long
    /// - [`Error::InvalidChar`] for the first symbol outside the alphabet
    pub fn try_parse(s: &str) -> Result<Self> {
        let bytes = match s.len() {
            COMPACT_LEN => decode_compact(s)?,
            HEX_LEN => decode_hex(s)?,
            len => return Err(Error::InvalidTextLength { len }),
        };
        Ok(Self::from_byte_array(bytes))
    }

    /// Returns `true` if `s` is a well-formed hex or compact identifier.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        codec::is_valid(s)
    }

    /// Orders by decoded instant instead of the raw tick.
    ///
    /// The kind flag is masked off before comparing, so a local-flagged and
    /// a UTC-flagged identifier created at the same instant compare by their
    /// remaining fields. Ties continue with region, machine, then counter.
    #[must_use]
    pub fn cmp_by_instant(&self, other: &Self) -> Ordering {
        self.tick
            .count()
            .cmp(&other.tick.count())
            .then_with(|| self.cmp_tail(other))
    }

    fn cmp_tail(&self, other: &Self) -> Ordering {
        self.region
            .cmp(&other.region)
            .then_with(|| self.machine.cmp(&other.machine))
            .then_with(|| self.counter().cmp(&other.counter()))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tick
            .cmp(&other.tick)
            .then_with(|| self.cmp_tail(other))
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<[u8; BYTE_LEN]> for Identifier {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self::from_byte_array(bytes)
    }
}

impl From<Identifier> for [u8; BYTE_LEN] {
    fn from(id: Identifier) -> Self {
        id.to_bytes()
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes).ok_or(Error::InvalidLength {
            expected: BYTE_LEN,
            len: bytes.len(),
        })
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0_u8; COMPACT_LEN];
        f.write_str(self.encode_compact_to_buf(&mut buf))
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identifier")
            .field(
                "tick",
                &format_args!("{}|{}", self.tick, self.tick.to_raw()),
            )
            .field("region", &self.region())
            .field("machine", &self.machine())
            .field("counter", &self.counter())
            .finish()
    }
}
