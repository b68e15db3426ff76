//! Snapshot order book: two price-sorted sides plus freshness metadata

use crate::types::Ts;
use serde::{Deserialize, Serialize};

/// Maximum levels stored per book side
pub const MAX_LEVELS: usize = 100;

/// One resting price level
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Level price, strictly positive when stored
    pub price: f64,
    /// Resting base volume, strictly positive when stored
    pub volume: f64,
}

impl PriceLevel {
    /// Construct a level
    #[must_use]
    pub const fn new(price: f64, volume: f64) -> Self {
        Self { price, volume }
    }
}

/// Whole-snapshot order book for one (venue, instrument) pair.
///
/// Bids are sorted by price descending, asks ascending, best level first on
/// both sides. The cache stamps `timestamp` and `sequence` on write; parsers
/// produce books with both fields zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Bid levels, best (highest) first
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best (lowest) first
    pub asks: Vec<PriceLevel>,
    /// Monotonic stamp of the last cache write
    pub timestamp: Ts,
    /// Per-key write counter, assigned by the cache
    pub sequence: u64,
}

impl OrderBook {
    /// Empty book with both sides reserved to `MAX_LEVELS`
    #[must_use]
    pub fn with_capacity() -> Self {
        Self {
            bids: Vec::with_capacity(MAX_LEVELS),
            asks: Vec::with_capacity(MAX_LEVELS),
            timestamp: Ts::ZERO,
            sequence: 0,
        }
    }

    /// A book is valid iff both sides are non-empty
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    /// Highest bid price, `0.0` when the side is empty
    #[must_use]
    pub fn best_bid(&self) -> f64 {
        self.bids.first().map_or(0.0, |l| l.price)
    }

    /// Lowest ask price, `0.0` when the side is empty
    #[must_use]
    pub fn best_ask(&self) -> f64 {
        self.asks.first().map_or(0.0, |l| l.price)
    }

    /// Absolute bid/ask spread
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.best_ask() - self.best_bid()
    }

    /// Spread as a percentage of the best bid, `0.0` when one-sided
    #[must_use]
    pub fn spread_pct(&self) -> f64 {
        let bid = self.best_bid();
        if bid <= 0.0 {
            return 0.0;
        }
        (self.best_ask() - bid) / bid * 100.0
    }

    /// Midpoint of the touch, `0.0` when one-sided
    #[must_use]
    pub fn mid_price(&self) -> f64 {
        let (bid, ask) = (self.best_bid(), self.best_ask());
        if bid <= 0.0 || ask <= 0.0 {
            return 0.0;
        }
        (bid + ask) / 2.0
    }

    /// Total bid volume over the first `max_levels` levels
    #[must_use]
    pub fn total_bid_depth(&self, max_levels: usize) -> f64 {
        self.bids.iter().take(max_levels).map(|l| l.volume).sum()
    }

    /// Total ask volume over the first `max_levels` levels
    #[must_use]
    pub fn total_ask_depth(&self, max_levels: usize) -> f64 {
        self.asks.iter().take(max_levels).map(|l| l.volume).sum()
    }

    /// Milliseconds since the last cache write
    #[must_use]
    pub fn age_ms(&self) -> u64 {
        self.timestamp.age_ms()
    }

    /// Drop all levels and reset the stamp to the unwritten sentinel
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.timestamp = Ts::ZERO;
    }
}
