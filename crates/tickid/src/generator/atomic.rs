use portable_atomic::{AtomicI8, AtomicU8, AtomicU16, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Error, Field, Identifier, Result, TimeSource, generator::IdentifierGenerator,
    rand::RandSource,
};

/// Largest value accepted by [`AtomicIdentifierGenerator::set_region`].
pub const MAX_REGION: u8 = u8::MAX;

/// Largest value accepted by [`AtomicIdentifierGenerator::set_machine`].
///
/// The field is 16 bits wide on the wire, but generators only ever hand out
/// machine tags up to this bound, random seeds included.
pub const MAX_MACHINE: u16 = 512;

/// Largest value accepted by [`AtomicIdentifierGenerator::set_counter`].
pub const MAX_COUNTER: u8 = u8::MAX;

/// Value the counter wraps to once it reaches [`COUNTER_WRAP_MAX`].
pub const COUNTER_WRAP_MIN: i8 = -127;

/// Highest stored counter value before wrapping.
pub const COUNTER_WRAP_MAX: i8 = 127;

/// Returns the counter value that follows `current`.
///
/// A counter at or above `127` wraps to `-127`; since `127` is `i8::MAX` that
/// is an equality check. The counter walks `-127..=127`: 255 states,
/// so `-128` is only ever observed after an explicit
/// [`AtomicIdentifierGenerator::set_counter`] and is followed by `-127`.
///
/// ```
/// use tickid::next_counter;
///
/// assert_eq!(next_counter(0), 1);
/// assert_eq!(next_counter(126), 127);
/// assert_eq!(next_counter(127), -127);
/// assert_eq!(next_counter(-128), -127);
/// ```
#[must_use]
pub const fn next_counter(current: i8) -> i8 {
    if current == COUNTER_WRAP_MAX {
        COUNTER_WRAP_MIN
    } else {
        current + 1
    }
}

/// A lock-free identifier generator suitable for multi-threaded environments.
///
/// The generator owns the three pieces of shared state every identifier
/// reads: the region and machine tags, and the rollover counter. Each
/// [`next_id`] call reads the time source, advances the counter with a single
/// compare-and-swap loop, and loads region and machine.
///
/// Region and machine are read far more often than written. Setters publish
/// with a plain atomic store, so identifiers created concurrently with a
/// setter may carry either the old or the new value, never a mix of bits.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Never blocks, never fails
/// - ❌ No uniqueness guarantee across processes that share region, machine,
///   and tick
///
/// [`next_id`]: AtomicIdentifierGenerator::next_id
#[derive(Debug)]
pub struct AtomicIdentifierGenerator<T>
where
    T: TimeSource,
{
    region: AtomicU8,
    machine: AtomicU16,
    #[cfg(feature = "cache-padded")]
    counter: crossbeam_utils::CachePadded<AtomicI8>,
    #[cfg(not(feature = "cache-padded"))]
    counter: AtomicI8,
    time: T,
}

impl<T> AtomicIdentifierGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator with process-random region and machine tags and
    /// the counter at zero.
    ///
    /// The seeds are drawn from [`ThreadRandom`], a cryptographically secure
    /// source. Random seeding makes collisions between processes unlikely;
    /// it does not rule them out, neither across restarts nor across
    /// processes that happen to draw the same tags.
    ///
    /// # Example
    /// ```
    /// use tickid::{AtomicIdentifierGenerator, MAX_MACHINE, SystemClock};
    ///
    /// let generator = AtomicIdentifierGenerator::new(SystemClock);
    /// let id = generator.next_id();
    /// assert!(id.machine() <= MAX_MACHINE);
    /// assert_eq!(id.counter(), 1);
    /// ```
    ///
    /// [`ThreadRandom`]: crate::rand::ThreadRandom
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    pub fn new(time: T) -> Self {
        Self::with_rand(time, &crate::rand::ThreadRandom)
    }

    /// Creates a generator whose region and machine tags are drawn from `rng`.
    pub fn with_rand<R>(time: T, rng: &R) -> Self
    where
        R: RandSource<u64>,
    {
        let seed = rng.rand();
        let region = seed as u8;
        let machine = ((seed >> 8) % (u64::from(MAX_MACHINE) + 1)) as u16;
        #[cfg(feature = "tracing")]
        tracing::debug!(region, machine, "seeded identifier generator");
        Self::from_components(region, machine, 0, time)
    }

    /// Creates a generator from explicit state.
    ///
    /// This is primarily useful for tests and for restoring a known counter
    /// position. The values are stored as given; `machine` is not checked
    /// against [`MAX_MACHINE`].
    pub fn from_components(region: u8, machine: u16, counter: i8, time: T) -> Self {
        Self {
            region: AtomicU8::new(region),
            machine: AtomicU16::new(machine),
            #[cfg(feature = "cache-padded")]
            counter: crossbeam_utils::CachePadded::new(AtomicI8::new(counter)),
            #[cfg(not(feature = "cache-padded"))]
            counter: AtomicI8::new(counter),
            time,
        }
    }

    /// Generates the next identifier.
    ///
    /// # Example
    /// ```
    /// use tickid::{AtomicIdentifierGenerator, SystemClock};
    ///
    /// let generator = AtomicIdentifierGenerator::from_components(1, 2, 0, SystemClock);
    /// let first = generator.next_id();
    /// let second = generator.next_id();
    /// assert_eq!((first.region(), first.machine()), (1, 2));
    /// assert_eq!(second.counter(), first.counter() + 1);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Identifier {
        let tick = self.time.current_tick();
        let machine = self.machine.load(Ordering::Relaxed);
        let region = self.region.load(Ordering::Relaxed);
        let counter = self.advance_counter();
        Identifier::from_components(tick, region, machine, counter)
    }

    /// Atomically advances the counter and returns the new value.
    ///
    /// Concurrent callers each observe a distinct step of the wrap sequence
    /// described in [`next_counter`].
    pub fn advance_counter(&self) -> i8 {
        let mut current = self.counter.load(Ordering::Relaxed);
        loop {
            let next = next_counter(current);
            match self.counter.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }

    /// Returns the region tag stamped on new identifiers.
    pub fn region(&self) -> u8 {
        self.region.load(Ordering::Relaxed)
    }

    /// Returns the machine tag stamped on new identifiers.
    pub fn machine(&self) -> u16 {
        self.machine.load(Ordering::Relaxed)
    }

    /// Returns the last counter value handed out, as a rolling `0..=255`
    /// value.
    pub fn counter(&self) -> u8 {
        self.raw_counter() as u8
    }

    /// Returns the last counter value handed out, as stored.
    pub fn raw_counter(&self) -> i8 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Sets the region tag for identifiers created from now on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `0 <= region <= 255`. The
    /// current value is left untouched on error.
    pub fn set_region(&self, region: i32) -> Result<()> {
        let region = check_bound(Field::Region, region, MAX_REGION.into())?;
        self.region.store(region as u8, Ordering::Relaxed);
        Ok(())
    }

    /// Sets the machine tag for identifiers created from now on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `0 <= machine <= 512`. The
    /// current value is left untouched on error.
    pub fn set_machine(&self, machine: i32) -> Result<()> {
        let machine = check_bound(Field::Machine, machine, MAX_MACHINE.into())?;
        self.machine.store(machine as u16, Ordering::Relaxed);
        Ok(())
    }

    /// Repositions the counter. The next identifier carries the value that
    /// follows `counter` in the wrap sequence.
    ///
    /// `counter` is given in the rolling `0..=255` view, so `129` stores
    /// `-127` and `255` stores `-1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `0 <= counter <= 255`. The
    /// current value is left untouched on error.
    pub fn set_counter(&self, counter: i32) -> Result<()> {
        let counter = check_bound(Field::Counter, counter, MAX_COUNTER.into())?;
        self.counter.store(counter as u8 as i8, Ordering::Relaxed);
        Ok(())
    }
}

impl<T> IdentifierGenerator for AtomicIdentifierGenerator<T>
where
    T: TimeSource,
{
    fn next_id(&self) -> Identifier {
        self.next_id()
    }
}

fn check_bound(field: Field, value: i32, max: i32) -> Result<i32> {
    if (0..=max).contains(&value) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%field, value, "accepted generator setting");
        Ok(value)
    } else {
        #[cfg(feature = "tracing")]
        tracing::warn!(%field, value, max, "rejected out-of-range value");
        Err(Error::OutOfRange {
            field,
            value: value.into(),
            min: 0,
            max: max.into(),
        })
    }
}
