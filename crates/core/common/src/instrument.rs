//! Instrument classification and per-instrument market state

use crate::book::OrderBook;
use crate::types::Ts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument class traded on a venue
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    /// Plain spot, own the asset
    Spot = 0,
    /// Collateralized spot with borrow interest
    Margin = 1,
    /// Perpetual swap with periodic funding
    Perpetual = 2,
    /// Dated future with basis to the index
    Future = 3,
    /// Vanilla option with Greeks
    Option = 4,
    /// Base-asset-settled contract (non-linear PnL)
    Inverse = 5,
    /// Token tracking the underlying at a fixed leverage
    LeveragedToken = 6,
}

impl InstrumentType {
    /// Number of instrument classes
    pub const COUNT: usize = 7;

    /// All classes, in discriminant order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Spot,
        Self::Margin,
        Self::Perpetual,
        Self::Future,
        Self::Option,
        Self::Inverse,
        Self::LeveragedToken,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Margin => "margin",
            Self::Perpetual => "perpetual",
            Self::Future => "future",
            Self::Option => "option",
            Self::Inverse => "inverse",
            Self::LeveragedToken => "leveraged_token",
        }
    }

    /// Resolve a canonical name. Case-sensitive exact match; unknown names
    /// are `None`, never a sentinel.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Index into flat per-instrument arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bitmask over the seven instrument classes, one bit per discriminant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentMask(pub u8);

impl InstrumentMask {
    /// Empty mask
    pub const NONE: Self = Self(0);

    /// Whether the class bit is set
    #[must_use]
    pub const fn contains(self, ty: InstrumentType) -> bool {
        self.0 & (1 << ty as u8) != 0
    }

    /// Number of supported classes
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Latest known market state for one (venue, instrument) pair.
///
/// A superset of the order book: fields that do not apply to the instrument
/// class stay zero. The cache stamps `timestamp` and `sequence` on write;
/// parsers fill everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentData {
    /// Instrument class this entry describes
    pub instrument: InstrumentType,
    /// Consolidated snapshot book
    pub book: OrderBook,
    /// Last traded price
    pub last_price: f64,
    /// Rolling 24h base volume
    pub volume_24h: f64,
    /// Monotonic stamp of the last cache write
    pub timestamp: Ts,
    /// Per-key write counter, assigned by the cache
    pub sequence: u64,

    // Perpetual / future / inverse
    /// Venue mark price
    pub mark_price: f64,
    /// Venue index price
    pub index_price: f64,
    /// Funding rate per 8h interval, as a fraction (perpetual/inverse)
    pub funding_rate: f64,
    /// Next funding timestamp, venue epoch millis (perpetual/inverse)
    pub next_funding_ts: i64,
    /// Venue-predicted next funding rate (perpetual/inverse)
    pub predicted_funding: f64,

    // Future
    /// Expiration timestamp, venue epoch millis
    pub expiration_ts: i64,
    /// `mark_price - index_price`
    pub basis: f64,
    /// Annualized basis rate
    pub basis_rate: f64,

    // Option
    /// Strike price
    pub strike: f64,
    /// Implied volatility percentage
    pub implied_vol: f64,
    /// Call (`true`) or put (`false`)
    pub is_call: bool,
    /// First-order underlying sensitivity, in `[-1, 1]`
    pub delta: f64,
    /// Rate of delta change
    pub gamma: f64,
    /// Time decay per day
    pub theta: f64,
    /// Implied-vol sensitivity
    pub vega: f64,
    /// Interest-rate sensitivity
    pub rho: f64,
    /// Current underlying price
    pub underlying_price: f64,
    /// Years to expiry
    pub time_to_expiry: f64,

    // Margin
    /// Hourly borrow interest for longs
    pub interest_rate_long: f64,
    /// Hourly borrow interest for shorts
    pub interest_rate_short: f64,
    /// Maximum allowed leverage
    pub max_leverage: f64,
    /// Maintenance margin ratio
    pub maintenance_margin: f64,

    // Inverse
    /// Base asset per contract
    pub contract_size: f64,
    /// Quote value per contract
    pub contract_value: f64,

    // Leveraged token
    /// Net asset value per token
    pub nav: f64,
    /// Current realized leverage
    pub real_leverage: f64,
    /// Target leverage the token rebalances toward
    pub target_leverage: f64,
    /// Last rebalance timestamp, venue epoch millis
    pub rebalance_ts: i64,
    /// Tokens in circulation
    pub basket: f64,
}

impl Default for InstrumentData {
    fn default() -> Self {
        Self {
            instrument: InstrumentType::Spot,
            book: OrderBook::default(),
            last_price: 0.0,
            volume_24h: 0.0,
            timestamp: Ts::ZERO,
            sequence: 0,
            mark_price: 0.0,
            index_price: 0.0,
            funding_rate: 0.0,
            next_funding_ts: 0,
            predicted_funding: 0.0,
            expiration_ts: 0,
            basis: 0.0,
            basis_rate: 0.0,
            strike: 0.0,
            implied_vol: 0.0,
            is_call: true,
            delta: 0.0,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
            rho: 0.0,
            underlying_price: 0.0,
            time_to_expiry: 0.0,
            interest_rate_long: 0.0,
            interest_rate_short: 0.0,
            max_leverage: 1.0,
            maintenance_margin: 0.0,
            contract_size: 1.0,
            contract_value: 0.0,
            nav: 0.0,
            real_leverage: 0.0,
            target_leverage: 3.0,
            rebalance_ts: 0,
            basket: 0.0,
        }
    }
}

impl InstrumentData {
    /// A valid entry has a two-sided book
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.book.is_valid()
    }

    /// Milliseconds since the last cache write
    #[must_use]
    pub fn age_ms(&self) -> u64 {
        self.timestamp.age_ms()
    }

    /// Valid and written within `max_age_ms` (inclusive)
    #[must_use]
    pub fn is_fresh(&self, max_age_ms: u64) -> bool {
        self.is_valid() && self.age_ms() <= max_age_ms
    }

    /// Best bid of the embedded book
    #[must_use]
    pub fn best_bid(&self) -> f64 {
        self.book.best_bid()
    }

    /// Best ask of the embedded book
    #[must_use]
    pub fn best_ask(&self) -> f64 {
        self.book.best_ask()
    }
}

/// Option sensitivity bundle for partial cache writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// First-order underlying sensitivity
    pub delta: f64,
    /// Rate of delta change
    pub gamma: f64,
    /// Time decay per day
    pub theta: f64,
    /// Implied-vol sensitivity
    pub vega: f64,
    /// Interest-rate sensitivity
    pub rho: f64,
}
