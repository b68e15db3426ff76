//! Process-wide trading configuration

use serde::{Deserialize, Serialize};

/// Tuning for the signal handler and instrument adjustments.
///
/// Immutable once handed to a handler. The adjustment knobs are policy, not
/// physics; defaults reproduce the tuned production values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TradingConfig {
    /// Minimum base quantity a signal must carry to be considered
    pub min_signal_quantity: f64,
    /// Adjusted impact must exceed this multiple of adjusted fees
    pub min_impact_multiple: f64,
    /// Fallback round-trip fee percentage when a venue fee is absent
    pub default_fees_pct: f64,
    /// Fraction of the expected move to capture on exit
    pub take_profit_ratio: f64,
    /// Book snapshots older than this are rejected as stale
    pub max_book_age_ms: u64,

    /// Assumed hold time for margin interest, in hours
    pub margin_hold_hours: f64,
    /// Converts a fractional funding rate into fee percentage points
    pub funding_rate_scale: f64,
    /// Assumed hold time for option theta decay, in hours
    pub option_hold_hours: f64,
    /// Below this |delta| the option adjustment falls back to raw impact
    pub min_option_delta: f64,
    /// Impact amplifier for inverse contracts past the threshold
    pub inverse_amplifier: f64,
    /// Raw impact percentage above which the inverse amplifier applies
    pub inverse_amplify_threshold: f64,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            min_signal_quantity: 5.0,
            min_impact_multiple: 2.0,
            default_fees_pct: 0.10,
            take_profit_ratio: 0.8,
            max_book_age_ms: 5000,
            margin_hold_hours: 4.0,
            funding_rate_scale: 100.0,
            option_hold_hours: 1.0,
            min_option_delta: 0.01,
            inverse_amplifier: 1.5,
            inverse_amplify_threshold: 1.0,
        }
    }
}

impl TradingConfig {
    /// Minimum required impact percentage before adjustments
    #[must_use]
    pub fn min_impact_pct(&self) -> f64 {
        self.default_fees_pct * self.min_impact_multiple
    }
}
