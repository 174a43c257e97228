use crate::{Tick, TimeSource};
use chrono::Utc;

/// A [`TimeSource`] backed by the wall clock, tagging every tick as UTC.
///
/// Every call queries the system time, so values can move backwards if the
/// clock is adjusted externally. Identifiers are still unique in that case
/// (the counter keeps advancing) but no longer sort by creation order.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_tick(&self) -> Tick {
        Tick::from_datetime(Utc::now())
    }
}
