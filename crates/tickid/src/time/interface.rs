use crate::Tick;

/// A trait for time sources that return the current instant as a [`Tick`].
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// # Example
///
/// ```
/// use tickid::{Tick, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_tick(&self) -> Tick {
///         Tick::from_raw(0x4000_0000_0000_0001)
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_tick().count(), 1);
/// ```
pub trait TimeSource {
    /// Returns the current instant.
    fn current_tick(&self) -> Tick;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_tick(&self) -> Tick {
        (**self).current_tick()
    }
}
