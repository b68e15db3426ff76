//! Level walks and the helpers derived from them

use common::{PriceImpact, PriceLevel};

/// Impact of selling `sell_qty` into the bids (prices descending).
///
/// `price_drop_pct` comes out non-negative. An empty side or a non-positive
/// quantity yields a zeroed impact with the whole quantity remaining.
#[must_use]
pub fn sell_impact(sell_qty: f64, bids: &[PriceLevel]) -> PriceImpact {
    let mut impact = PriceImpact::default();

    if bids.is_empty() || sell_qty <= 0.0 {
        impact.volume_remaining = sell_qty;
        return impact;
    }

    let mut remaining = sell_qty;
    impact.start_price = bids[0].price;
    impact.end_price = impact.start_price;

    for level in bids {
        if remaining <= 0.0 {
            break;
        }
        let fill = remaining.min(level.volume);
        impact.total_cost += level.price * fill;
        impact.volume_filled += fill;
        remaining -= fill;
        impact.end_price = level.price;
        impact.levels_eaten += 1;
    }

    impact.volume_remaining = remaining;
    impact.vwap = if impact.volume_filled > 0.0 {
        impact.total_cost / impact.volume_filled
    } else {
        impact.start_price
    };
    if impact.start_price > 0.0 {
        impact.price_drop_pct =
            (impact.start_price - impact.end_price) / impact.start_price * 100.0;
    }

    impact
}

/// Impact of buying `buy_qty` from the asks (prices ascending).
///
/// The move is stored as a negative `price_drop_pct` so callers can recover
/// direction from the sign.
#[must_use]
pub fn buy_impact(buy_qty: f64, asks: &[PriceLevel]) -> PriceImpact {
    let mut impact = PriceImpact::default();

    if asks.is_empty() || buy_qty <= 0.0 {
        impact.volume_remaining = buy_qty;
        return impact;
    }

    let mut remaining = buy_qty;
    impact.start_price = asks[0].price;
    impact.end_price = impact.start_price;

    for level in asks {
        if remaining <= 0.0 {
            break;
        }
        let fill = remaining.min(level.volume);
        impact.total_cost += level.price * fill;
        impact.volume_filled += fill;
        remaining -= fill;
        impact.end_price = level.price;
        impact.levels_eaten += 1;
    }

    impact.volume_remaining = remaining;
    impact.vwap = if impact.volume_filled > 0.0 {
        impact.total_cost / impact.volume_filled
    } else {
        impact.start_price
    };
    if impact.start_price > 0.0 {
        impact.price_drop_pct =
            -((impact.end_price - impact.start_price) / impact.start_price * 100.0);
    }

    impact
}

/// Take-profit target for a position entered at `entry_price`.
///
/// Exits at `take_profit_ratio` of the expected move: below entry for a
/// short, above for a long.
#[must_use]
pub fn exit_price(
    entry_price: f64,
    impact: &PriceImpact,
    is_short: bool,
    take_profit_ratio: f64,
) -> f64 {
    let target_move_pct = impact.price_drop_pct.abs() * take_profit_ratio;
    if is_short {
        entry_price * (1.0 - target_move_pct / 100.0)
    } else {
        entry_price * (1.0 + target_move_pct / 100.0)
    }
}

/// Smallest cumulative bid volume at which the next consumed level breaches
/// `start_price * (1 - target_impact_pct / 100)`.
///
/// Selling exactly this amount stops at the last level above the target;
/// any additional size reaches past it.
#[must_use]
pub fn min_base_for_impact(bids: &[PriceLevel], target_impact_pct: f64) -> f64 {
    let Some(top) = bids.first() else {
        return 0.0;
    };
    if target_impact_pct <= 0.0 {
        return 0.0;
    }

    let target_price = top.price * (1.0 - target_impact_pct / 100.0);
    let mut volume_needed = 0.0;
    for level in bids {
        if level.price <= target_price {
            break;
        }
        volume_needed += level.volume;
    }
    volume_needed
}

/// Total resting volume over the first `max_levels` levels of one side
#[must_use]
pub fn total_depth(levels: &[PriceLevel], max_levels: usize) -> f64 {
    levels.iter().take(max_levels).map(|l| l.volume).sum()
}

/// Execution-weighted average price for filling `volume` against one side.
///
/// Falls back to the top-of-book price when nothing fills, and `0.0` on an
/// empty side.
#[must_use]
pub fn vwap_for_volume(levels: &[PriceLevel], volume: f64) -> f64 {
    let Some(top) = levels.first() else {
        return 0.0;
    };
    if volume <= 0.0 {
        return top.price;
    }

    let mut remaining = volume;
    let mut total_cost = 0.0;
    let mut total_volume = 0.0;
    for level in levels {
        if remaining <= 0.0 {
            break;
        }
        let fill = remaining.min(level.volume);
        total_cost += level.price * fill;
        total_volume += fill;
        remaining -= fill;
    }

    if total_volume > 0.0 {
        total_cost / total_volume
    } else {
        top.price
    }
}
