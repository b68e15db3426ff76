//! Self-measured hot-path latency, for CI gating
//!
//! Criterion benches give the full picture; this entry point gives a cheap
//! in-process average that a CI job can assert a ceiling on without the
//! bench harness.

use crate::handler::SignalHandler;
use common::{BlockchainSignal, InstrumentType, Venue};
use std::hint::black_box;
use std::time::Instant;

/// Average hot-path costs over a measurement run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyReport {
    /// Iterations measured (after warmup)
    pub iterations: u32,
    /// Average nanoseconds per `process_signal` call
    pub avg_signal_ns: u64,
    /// Average nanoseconds per raw impact walk
    pub avg_impact_ns: u64,
}

/// Measure `process_signal` and the underlying walk for one signal shape.
///
/// A tenth of the iterations run first as warmup and are discarded. The walk
/// is timed against a snapshot taken once, so the two averages separate
/// cache-read cost from pure math.
#[must_use]
pub fn measure(
    handler: &SignalHandler,
    signal: &BlockchainSignal,
    instrument: InstrumentType,
    iterations: u32,
) -> LatencyReport {
    let iterations = iterations.max(1);

    for _ in 0..iterations / 10 {
        black_box(handler.process_signal(black_box(signal), instrument));
    }

    let started = Instant::now();
    for _ in 0..iterations {
        black_box(handler.process_signal(black_box(signal), instrument));
    }
    let avg_signal_ns = per_iteration(started, iterations);

    let book = Venue::from_name(&signal.venue_name)
        .map(|venue| handler.cache().get_book(venue, instrument))
        .unwrap_or_default();

    let started = Instant::now();
    for _ in 0..iterations {
        let impact = if signal.is_inflow {
            impact::sell_impact(black_box(signal.base_quantity), &book.bids)
        } else {
            impact::buy_impact(black_box(signal.base_quantity), &book.asks)
        };
        black_box(impact);
    }
    let avg_impact_ns = per_iteration(started, iterations);

    LatencyReport {
        iterations,
        avg_signal_ns,
        avg_impact_ns,
    }
}

fn per_iteration(started: Instant, iterations: u32) -> u64 {
    let total = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
    total / u64::from(iterations)
}
