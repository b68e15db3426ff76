//! Monotonic timestamps for freshness tracking

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

fn anchor() -> Instant {
    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    *ANCHOR.get_or_init(Instant::now)
}

/// Timestamp in nanoseconds against a process-local monotonic anchor.
///
/// Wall clocks can step backwards; staleness checks must not. `Ts` counts
/// from the first reading taken in this process, so values are comparable
/// within a process and meaningless across processes. `Ts::ZERO` is the
/// "never written" sentinel and ages as `u64::MAX`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Ts(pub u64);

impl Ts {
    /// Sentinel for entries that have never been stamped
    pub const ZERO: Self = Self(0);

    /// Current monotonic reading. Never returns `Ts::ZERO`.
    #[must_use]
    pub fn now() -> Self {
        // +1 keeps the zero sentinel unreachable even for the very first
        // reading in the process.
        Self(u64::try_from(anchor().elapsed().as_nanos()).unwrap_or(u64::MAX - 1) + 1)
    }

    /// Construct from raw nanoseconds
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Raw nanoseconds
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Nanoseconds truncated to milliseconds
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0 / 1_000_000
    }

    /// Age in milliseconds relative to the current reading.
    ///
    /// `Ts::ZERO` reports `u64::MAX` so unwritten entries are always stale.
    #[must_use]
    pub fn age_ms(self) -> u64 {
        if self.0 == 0 {
            return u64::MAX;
        }
        Self::now().0.saturating_sub(self.0) / 1_000_000
    }

    /// A reading `ms` milliseconds in the past, clamped away from the
    /// sentinel. Used to fabricate aged entries in tests.
    #[must_use]
    pub fn minus_millis(self, ms: u64) -> Self {
        Self(self.0.saturating_sub(ms * 1_000_000).max(1))
    }
}

impl fmt::Display for Ts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_never_zero() {
        assert_ne!(Ts::now(), Ts::ZERO);
    }

    #[test]
    fn now_is_monotonic() {
        let a = Ts::now();
        let b = Ts::now();
        assert!(b >= a);
    }

    #[test]
    fn zero_is_infinitely_old() {
        assert_eq!(Ts::ZERO.age_ms(), u64::MAX);
    }

    #[test]
    fn aged_reading_reports_age() {
        let ts = Ts::now().minus_millis(6000);
        let age = ts.age_ms();
        assert!(age >= 6000);
        assert!(age < 7000);
    }

    #[test]
    fn serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let ts = Ts::from_nanos(1_234_567_890);
        let encoded = bincode::serialize(&ts)?;
        let decoded: Ts = bincode::deserialize(&encoded)?;
        assert_eq!(ts, decoded);
        Ok(())
    }
}
