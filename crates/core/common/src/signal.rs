//! Flow signals, price impact, and the trade decision they produce

use crate::types::Ts;
use crate::venue::Venue;
use serde::{Deserialize, Serialize};

/// Result of walking one side of a book with a hypothetical taker order.
///
/// `price_drop_pct` is positive for sell walks and negative for buy walks;
/// callers recover direction from the sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceImpact {
    /// Top-of-book price before execution
    pub start_price: f64,
    /// Worst level touched
    pub end_price: f64,
    /// Volume-weighted average fill price
    pub vwap: f64,
    /// Percentage move from `start_price` to `end_price`, signed by direction
    pub price_drop_pct: f64,
    /// Base volume actually fillable
    pub volume_filled: f64,
    /// Base volume the book could not absorb
    pub volume_remaining: f64,
    /// Quote value of the filled volume
    pub total_cost: f64,
    /// Number of levels consumed
    pub levels_eaten: usize,
}

impl PriceImpact {
    /// Impact clears fees with a safety multiple: `|impact| >= fees * safety`
    #[must_use]
    pub fn is_profitable(&self, fees_pct: f64, safety_multiple: f64) -> bool {
        self.price_drop_pct.abs() >= fees_pct * safety_multiple
    }

    /// Net move after fees, in percent
    #[must_use]
    pub fn expected_profit_pct(&self, fees_pct: f64) -> f64 {
        self.price_drop_pct.abs() - fees_pct
    }

    /// Net move scaled by leverage, floored at zero
    #[must_use]
    pub fn leveraged_return(&self, fees_pct: f64, leverage: u32) -> f64 {
        let net = self.expected_profit_pct(fees_pct);
        if net > 0.0 {
            net * f64::from(leverage)
        } else {
            0.0
        }
    }
}

/// An observed on-chain movement of base asset onto or off a venue.
///
/// An inflow (deposit) precedes sell pressure on the venue's bids; an
/// outflow (withdrawal) precedes buy pressure on the asks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockchainSignal {
    /// Venue canonical name, lowercase
    pub venue_name: String,
    /// Deposit (`true`) or withdrawal (`false`)
    pub is_inflow: bool,
    /// Base asset quantity observed
    pub base_quantity: f64,
    /// When the monitor observed the movement
    pub observed_at: Ts,
    /// Monitor-reported detection latency in nanoseconds
    pub detection_latency_ns: u64,
}

impl BlockchainSignal {
    /// Inflows imply selling into bids
    #[must_use]
    pub const fn is_short(&self) -> bool {
        self.is_inflow
    }

    /// Outflows imply buying from asks
    #[must_use]
    pub const fn is_long(&self) -> bool {
        !self.is_inflow
    }
}

/// Deterministic go/no-go produced by the signal handler.
///
/// Rejects are normal outcomes, not errors: `should_trade` is `false` and
/// `reason` explains why. The reason text is diagnostic only; callers must
/// not pattern-match on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDecision {
    /// Whether to execute
    pub should_trade: bool,
    /// Direction: `true` = short (sell into bids)
    pub is_short: bool,
    /// Resolved venue, `None` when the signal named an unknown venue
    pub venue: Option<Venue>,
    /// Touch price at entry
    pub entry_price: f64,
    /// Take-profit target
    pub exit_price: f64,
    /// Impact computed for the signal quantity
    pub impact: PriceImpact,
    /// Human-readable accept or reject explanation
    pub reason: String,
    /// Monotonic nanoseconds spent producing this decision
    pub processing_ns: u64,
}

impl Default for TradeDecision {
    fn default() -> Self {
        Self {
            should_trade: false,
            is_short: false,
            venue: None,
            entry_price: 0.0,
            exit_price: 0.0,
            impact: PriceImpact::default(),
            reason: String::new(),
            processing_ns: 0,
        }
    }
}

impl TradeDecision {
    /// Maximum leverage of the resolved venue, `1` when unresolved
    #[must_use]
    pub fn leverage(&self) -> u32 {
        self.venue.map_or(1, |v| v.config().max_leverage)
    }

    /// Leveraged net return at this venue's maximum leverage
    #[must_use]
    pub fn expected_return(&self, fees_pct: f64) -> f64 {
        self.impact.leveraged_return(fees_pct, self.leverage())
    }
}
