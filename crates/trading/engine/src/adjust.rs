//! Instrument-specific normalization of impact and fees
//!
//! One profitability rule covers all seven instrument classes: adjusted
//! impact must exceed `min_impact_multiple` times adjusted fees. The
//! per-class rules below fold carry costs into fees and exposure scaling
//! into impact so that rule applies uniformly. The constants are tuned
//! policy, exposed through [`TradingConfig`].

use common::{InstrumentData, InstrumentType, TradingConfig};

/// Impact and fees after instrument normalization, both in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjusted {
    /// Absolute impact percentage after exposure scaling
    pub impact_pct: f64,
    /// Fee percentage after carry costs
    pub fees_pct: f64,
}

/// Normalize a raw absolute impact and base fee for one instrument class.
///
/// - `Spot`: untouched.
/// - `Margin`: hourly borrow interest over the assumed hold joins the fees.
/// - `Perpetual`: the 8h funding rate joins the fees as percentage points.
/// - `Future`: basis convergence joins the impact when it favors the
///   direction (long and basis below index, or short and basis above).
/// - `Option`: impact scales by |delta| unless delta is too small to trust;
///   theta decay over the assumed hold joins the fees.
/// - `Inverse`: impact past the threshold is amplified for the non-linear
///   contract PnL; funding joins the fees as for perpetuals.
/// - `LeveragedToken`: impact scales by the token's target leverage.
#[must_use]
pub fn adjust(
    instrument: InstrumentType,
    raw_impact_pct: f64,
    base_fees_pct: f64,
    data: &InstrumentData,
    is_short: bool,
    entry_price: f64,
    config: &TradingConfig,
) -> Adjusted {
    let mut impact_pct = raw_impact_pct.abs();
    let mut fees_pct = base_fees_pct;

    match instrument {
        InstrumentType::Spot => {}
        InstrumentType::Margin => {
            fees_pct += data.interest_rate_long.abs() * config.margin_hold_hours;
        }
        InstrumentType::Perpetual => {
            fees_pct += data.funding_rate.abs() * config.funding_rate_scale;
        }
        InstrumentType::Future => {
            // Basis converges to zero at expiry; credit only the favorable
            // direction.
            let favorable = (!is_short && data.basis < 0.0) || (is_short && data.basis > 0.0);
            if favorable && entry_price > 0.0 {
                impact_pct += (data.basis / entry_price * 100.0).abs();
            }
        }
        InstrumentType::Option => {
            if data.delta.abs() > config.min_option_delta {
                impact_pct *= data.delta.abs();
            }
            fees_pct += data.theta.abs() / 24.0 * config.option_hold_hours;
        }
        InstrumentType::Inverse => {
            if impact_pct > config.inverse_amplify_threshold {
                impact_pct *= config.inverse_amplifier;
            }
            fees_pct += data.funding_rate.abs() * config.funding_rate_scale;
        }
        InstrumentType::LeveragedToken => {
            impact_pct *= data.target_leverage;
        }
    }

    Adjusted {
        impact_pct,
        fees_pct,
    }
}
