//! Signal handler: cached book + flow signal -> trade decision

use crate::adjust::adjust;
use cache::InstrumentCache;
use common::{
    BlockchainSignal, InstrumentData, InstrumentType, TradeDecision, TradingConfig, Venue,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Venue fees below this are treated as unset and fall back to the default
const MIN_VENUE_FEE_PCT: f64 = 0.01;

/// Stateless decision engine over a shared cache.
///
/// Every call is independent; the handler holds no mutable state. The
/// config is fixed at construction.
pub struct SignalHandler {
    cache: Arc<InstrumentCache>,
    config: TradingConfig,
}

impl SignalHandler {
    /// Handler over `cache` with the given tuning
    #[must_use]
    pub fn new(cache: Arc<InstrumentCache>, config: TradingConfig) -> Self {
        Self { cache, config }
    }

    /// Current tuning
    #[must_use]
    pub fn config(&self) -> &TradingConfig {
        &self.config
    }

    /// The cache this handler reads from
    #[must_use]
    pub fn cache(&self) -> &Arc<InstrumentCache> {
        &self.cache
    }

    /// Process a flow signal against the cached state for `instrument`.
    ///
    /// Never errors and never panics: every outcome is a [`TradeDecision`]
    /// with a populated reason and a processing-time stamp.
    #[must_use]
    pub fn process_signal(
        &self,
        signal: &BlockchainSignal,
        instrument: InstrumentType,
    ) -> TradeDecision {
        let started = Instant::now();

        let Some(venue) = Venue::from_name(&signal.venue_name) else {
            let mut decision = TradeDecision {
                is_short: signal.is_inflow,
                reason: format!("Unknown venue: {}", signal.venue_name),
                ..TradeDecision::default()
            };
            stamp(&mut decision, started);
            debug!(venue = %signal.venue_name, reason = %decision.reason, "signal rejected");
            return decision;
        };

        let data = self.cache.get(venue, instrument);
        let fees = self.base_fees_pct(venue);
        let decision = self.decide(signal, venue, instrument, &data, fees, started);
        debug!(
            venue = %venue,
            instrument = %instrument,
            should_trade = decision.should_trade,
            processing_ns = decision.processing_ns,
            reason = %decision.reason,
            "signal processed"
        );
        decision
    }

    /// Decision kernel over an explicit snapshot and fee.
    ///
    /// For callers that already hold an [`InstrumentData`] copy (replay,
    /// monitoring, tests); `process_signal` is this plus the cache read and
    /// venue fee lookup.
    #[must_use]
    pub fn evaluate(
        &self,
        signal: &BlockchainSignal,
        venue: Venue,
        instrument: InstrumentType,
        data: &InstrumentData,
        base_fees_pct: f64,
    ) -> TradeDecision {
        self.decide(signal, venue, instrument, data, base_fees_pct, Instant::now())
    }

    /// Cheap pre-check before full processing: known venue, large enough
    /// quantity, and a fresh two-sided book.
    #[must_use]
    pub fn quick_filter(&self, venue_name: &str, base_quantity: f64) -> bool {
        if base_quantity < self.config.min_signal_quantity {
            return false;
        }
        let Some(venue) = Venue::from_name(venue_name) else {
            return false;
        };
        InstrumentType::ALL
            .into_iter()
            .any(|ty| self.cache.is_fresh(venue, ty, self.config.max_book_age_ms))
    }

    fn base_fees_pct(&self, venue: Venue) -> f64 {
        let fee = venue.config().taker_fee_pct();
        if fee < MIN_VENUE_FEE_PCT {
            self.config.default_fees_pct
        } else {
            fee
        }
    }

    #[allow(clippy::too_many_lines)]
    fn decide(
        &self,
        signal: &BlockchainSignal,
        venue: Venue,
        instrument: InstrumentType,
        data: &InstrumentData,
        base_fees_pct: f64,
        started: Instant,
    ) -> TradeDecision {
        let mut decision = TradeDecision {
            is_short: signal.is_inflow,
            venue: Some(venue),
            ..TradeDecision::default()
        };

        if signal.base_quantity < self.config.min_signal_quantity {
            decision.reason = format!(
                "Deposit too small: {:.2} < {:.2} required",
                signal.base_quantity, self.config.min_signal_quantity
            );
            stamp(&mut decision, started);
            return decision;
        }

        if data.age_ms() > self.config.max_book_age_ms {
            decision.reason = format!("Order book stale (>{}ms old)", self.config.max_book_age_ms);
            stamp(&mut decision, started);
            return decision;
        }

        if !data.is_valid() {
            decision.reason = "Order book not available".to_string();
            stamp(&mut decision, started);
            return decision;
        }

        if signal.is_inflow {
            decision.impact = impact::sell_impact(signal.base_quantity, &data.book.bids);
            decision.entry_price = data.book.best_bid();
        } else {
            decision.impact = impact::buy_impact(signal.base_quantity, &data.book.asks);
            decision.entry_price = data.book.best_ask();
        }

        if decision.impact.volume_remaining > 0.0 {
            decision.reason = format!(
                "Insufficient depth: only {:.2} of {:.2} fillable",
                decision.impact.volume_filled, signal.base_quantity
            );
            stamp(&mut decision, started);
            return decision;
        }

        let adjusted = adjust(
            instrument,
            decision.impact.price_drop_pct,
            base_fees_pct,
            data,
            decision.is_short,
            decision.entry_price,
            &self.config,
        );
        let min_required = adjusted.fees_pct * self.config.min_impact_multiple;

        if adjusted.impact_pct < min_required {
            decision.reason = format!(
                "[{instrument}] Impact {:.4}% < required {:.4}%",
                adjusted.impact_pct, min_required
            );
            stamp(&mut decision, started);
            return decision;
        }

        decision.should_trade = true;
        decision.exit_price = impact::exit_price(
            decision.entry_price,
            &decision.impact,
            decision.is_short,
            self.config.take_profit_ratio,
        );
        decision.reason = format!(
            "[{instrument}] Trade: impact {:.4}% >= required {:.4}%, expected +{:.2}%",
            adjusted.impact_pct,
            min_required,
            adjusted.impact_pct - adjusted.fees_pct
        );
        stamp(&mut decision, started);
        decision
    }
}

fn stamp(decision: &mut TradeDecision, started: Instant) {
    decision.processing_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
}
