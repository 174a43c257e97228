use crate::{SystemClock, TimeSource};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use core::{fmt, time::Duration};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of ticks in one second (one tick is 100 nanoseconds).
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Number of nanoseconds represented by a single tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Offset in seconds from the Unix epoch to the tick epoch:
/// Monday, January 1, 0001 00:00:00 UTC (proleptic Gregorian).
pub const EPOCH_OFFSET_SECS: i64 = -62_135_596_800;

/// Tick count of the Unix epoch: Thursday, January 1, 1970 00:00:00 UTC.
pub const UNIX_EPOCH_TICKS: i64 = -EPOCH_OFFSET_SECS * TICKS_PER_SECOND;

/// The 2-bit kind flag stored in the high bits of a [`Tick`].
///
/// ```text
///  bits 63..62 | meaning
///  ------------+---------------------------------
///       00     | unspecified
///       01     | UTC
///       10     | local (offset is not stored)
///       11     | reserved, decoded as not local
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickKind {
    Unspecified,
    Utc,
    Local,
    Reserved,
}

impl TickKind {
    /// Decodes the kind from the two lowest bits of `bits`.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0b00 => Self::Unspecified,
            0b01 => Self::Utc,
            0b10 => Self::Local,
            _ => Self::Reserved,
        }
    }

    /// Returns the flag already shifted into the high bits of a raw tick.
    #[must_use]
    pub const fn to_flag(self) -> i64 {
        let bits: u64 = match self {
            Self::Unspecified => 0b00,
            Self::Utc => 0b01,
            Self::Local => 0b10,
            Self::Reserved => 0b11,
        };
        (bits << Tick::KIND_SHIFT) as i64
    }

    /// Only the `10` pattern carries the local hint.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }
}

/// A point in time packed as .NET-compatible 100ns ticks.
///
/// ```text
///  Bit Index:  63      62 61                                0
///              +---------+-----------------------------------+
///  Field:      | kind (2)| ticks since 0001-01-01 UTC (62)   |
///              +---------+-----------------------------------+
///              |<-------- MSB ---- 64 bits ---- LSB -------->|
/// ```
///
/// The layout matches the value produced by `DateTime.ToBinary()` for UTC and
/// local instants. The local UTC offset is never stored: a local-flagged tick
/// decodes to the same instant as its UTC twin and only reports
/// [`Tick::is_local`].
///
/// `Ord` compares the raw signed value, so the kind flag participates: a
/// local-flagged tick sorts before every UTC tick. Use [`Tick::count`] to
/// compare instants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Tick {
    raw: i64,
}

impl Tick {
    /// Bit position of the kind flag.
    pub const KIND_SHIFT: u32 = 62;

    /// Bitmask for the 62-bit tick count.
    pub const COUNT_MASK: i64 = 0x3FFF_FFFF_FFFF_FFFF;

    /// Returns the current instant from the system clock, tagged UTC.
    #[must_use]
    pub fn now() -> Self {
        SystemClock.current_tick()
    }

    /// Wraps a raw packed value, kind flag included.
    ///
    /// No validation is performed. Any `i64` is a well-formed tick: values
    /// far outside the usual range simply decode to far-past or far-future
    /// instants.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Builds a tick from a count since the tick epoch and an explicit kind.
    /// Bits of `count` above bit 61 are discarded.
    #[must_use]
    pub const fn from_count(count: i64, kind: TickKind) -> Self {
        Self {
            raw: (count & Self::COUNT_MASK) | kind.to_flag(),
        }
    }

    /// Converts an instant to a UTC-tagged tick.
    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self::with_kind(datetime, TickKind::Utc)
    }

    /// Converts an instant to a tick carrying an explicit kind flag.
    ///
    /// Precision below 100ns is truncated. Instants before the tick epoch
    /// are not rejected: the count wraps in two's complement, as does the
    /// `DateTime.ToBinary()` arithmetic this mirrors.
    ///
    /// The count is not masked either. Instants at or past 2^62 ticks (around
    /// the year 14 600) set bit 62 themselves, so the stored kind and the
    /// decoded instant no longer match the input. Use [`Tick::from_count`]
    /// to force a clean flag.
    #[must_use]
    pub fn with_kind(datetime: DateTime<Utc>, kind: TickKind) -> Self {
        // Leap seconds are reported as nanos >= 1e9; fold them into the
        // preceding second.
        let nanos = i64::from(datetime.timestamp_subsec_nanos().min(999_999_999));
        let count = datetime
            .timestamp()
            .wrapping_sub(EPOCH_OFFSET_SECS)
            .wrapping_mul(TICKS_PER_SECOND)
            .wrapping_add(nanos / NANOS_PER_TICK);
        Self {
            raw: count | kind.to_flag(),
        }
    }

    /// Returns the raw packed value, kind flag included.
    #[must_use]
    pub const fn to_raw(self) -> i64 {
        self.raw
    }

    /// Returns the 62-bit tick count with the kind flag masked off.
    #[must_use]
    pub const fn count(self) -> i64 {
        self.raw & Self::COUNT_MASK
    }

    /// Returns the decoded kind flag.
    #[must_use]
    pub const fn kind(self) -> TickKind {
        TickKind::from_bits((self.raw as u64) >> Self::KIND_SHIFT)
    }

    #[must_use]
    pub const fn is_utc(self) -> bool {
        matches!(self.kind(), TickKind::Utc)
    }

    #[must_use]
    pub const fn is_local(self) -> bool {
        self.kind().is_local()
    }

    /// Decodes the instant this tick represents. The kind flag is ignored.
    #[must_use]
    pub fn to_datetime(self) -> DateTime<Utc> {
        let count = self.count();
        let secs = count / TICKS_PER_SECOND + EPOCH_OFFSET_SECS;
        let nanos = ((count % TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        // A 62-bit count tops out around the year 14600, well inside
        // chrono's range, so the fallback is never taken.
        DateTime::from_timestamp(secs, nanos).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Decodes the instant together with the "is local" hint.
    #[must_use]
    pub fn decode(self) -> (DateTime<Utc>, bool) {
        (self.to_datetime(), self.is_local())
    }

    /// Converts to a [`SystemTime`], or `None` if the platform's
    /// `SystemTime` cannot represent the instant.
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        let datetime = self.to_datetime();
        let secs = datetime.timestamp();
        let nanos = Duration::from_nanos(u64::from(datetime.timestamp_subsec_nanos()));
        if secs >= 0 {
            UNIX_EPOCH.checked_add(Duration::from_secs(secs.unsigned_abs()) + nanos)
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(secs.unsigned_abs()))?
                .checked_add(nanos)
        }
    }

    /// Returns the signed time elapsed from `first` to `second`.
    ///
    /// Both operands are decoded first, so kind flags are ignored.
    #[must_use]
    pub fn between(first: Self, second: Self) -> TimeDelta {
        second
            .to_datetime()
            .signed_duration_since(first.to_datetime())
    }

    /// Returns the signed time elapsed from `first` until now.
    #[must_use]
    pub fn between_now(first: Self) -> TimeDelta {
        Utc::now().signed_duration_since(first.to_datetime())
    }
}

impl From<DateTime<Utc>> for Tick {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl From<SystemTime> for Tick {
    fn from(time: SystemTime) -> Self {
        Self::from_datetime(DateTime::<Utc>::from(time))
    }
}

impl From<Tick> for DateTime<Utc> {
    fn from(tick: Tick) -> Self {
        tick.to_datetime()
    }
}

impl From<Tick> for i64 {
    fn from(tick: Tick) -> Self {
        tick.to_raw()
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datetime = self.to_datetime();
        f.write_str(&datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl fmt::Debug for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tick")
            .field("raw", &format_args!("{} (0x{:016x})", self.raw, self.raw))
            .field("count", &self.count())
            .field("kind", &self.kind())
            .field("instant", &format_args!("{self}"))
            .finish()
    }
}
