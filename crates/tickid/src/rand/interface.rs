/// Source of the random seed a generator derives its region and machine tags
/// from.
///
/// Implement it with a fixed value to get reproducible tags in tests.
///
/// # Example
/// ```
/// use tickid::{AtomicIdentifierGenerator, RandSource, SystemClock};
///
/// struct FixedSeed(u64);
/// impl RandSource<u64> for FixedSeed {
///     fn rand(&self) -> u64 {
///         self.0
///     }
/// }
///
/// // The low byte becomes the region, the rest is reduced into 0..=512.
/// let generator = AtomicIdentifierGenerator::with_rand(SystemClock, &FixedSeed(0x2a_07));
/// assert_eq!(generator.region(), 0x07);
/// assert_eq!(generator.machine(), 0x2a);
/// ```
pub trait RandSource<T> {
    /// Draws the next value.
    fn rand(&self) -> T;
}
