//! Consolidated market-state cache
//!
//! Latest-known [`InstrumentData`] per (venue, instrument) pair behind one
//! reader-writer lock per key. Readers never block each other; writers on
//! the same key serialize; per-key sequence counters allow lock-free change
//! detection. Lock hold times are bounded by the snapshot copy, a few
//! microseconds at full book depth.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

use common::{Greeks, InstrumentData, InstrumentType, OrderBook, Ts, Venue};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Notification fired after a book-level write completes.
///
/// Runs on the writer's thread after the key lock is released, with a
/// snapshot of the stored value. It must not call back into the cache.
pub type UpdateCallback = Arc<dyn Fn(Venue, InstrumentType, &InstrumentData) + Send + Sync>;

struct Slot {
    data: RwLock<InstrumentData>,
    sequence: AtomicU64,
}

impl Slot {
    fn new() -> Self {
        Self {
            data: RwLock::new(InstrumentData::default()),
            sequence: AtomicU64::new(0),
        }
    }
}

/// Thread-safe cache over every (venue, instrument) pair.
///
/// Multiple independent instances may coexist in one process; there is no
/// global state.
pub struct InstrumentCache {
    slots: Box<[Slot]>,
    on_update: RwLock<Option<UpdateCallback>>,
}

impl Default for InstrumentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InstrumentCache {
    const LEN: usize = Venue::COUNT * InstrumentType::COUNT;

    /// Create a cache with every slot empty (invalid, sequence 0)
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: (0..Self::LEN).map(|_| Slot::new()).collect(),
            on_update: RwLock::new(None),
        }
    }

    fn slot(&self, venue: Venue, instrument: InstrumentType) -> &Slot {
        &self.slots[venue.index() * InstrumentType::COUNT + instrument.index()]
    }

    // ------------------------------------------------------------------
    // Reads (shared lock, never block other readers)
    // ------------------------------------------------------------------

    /// Value-copy of the entry; a default (invalid) value when never written
    #[must_use]
    pub fn get(&self, venue: Venue, instrument: InstrumentType) -> InstrumentData {
        self.slot(venue, instrument).data.read().clone()
    }

    /// Value-copy of just the embedded book
    #[must_use]
    pub fn get_book(&self, venue: Venue, instrument: InstrumentType) -> OrderBook {
        self.slot(venue, instrument).data.read().book.clone()
    }

    /// Valid and written within `max_age_ms` (inclusive)
    #[must_use]
    pub fn is_fresh(&self, venue: Venue, instrument: InstrumentType, max_age_ms: u64) -> bool {
        self.slot(venue, instrument).data.read().is_fresh(max_age_ms)
    }

    /// Strictly older than `max_age_ms`; never-written entries are stale
    #[must_use]
    pub fn is_stale(&self, venue: Venue, instrument: InstrumentType, max_age_ms: u64) -> bool {
        self.slot(venue, instrument).data.read().age_ms() > max_age_ms
    }

    /// Whether the entry currently holds a two-sided book
    #[must_use]
    pub fn is_valid(&self, venue: Venue, instrument: InstrumentType) -> bool {
        self.slot(venue, instrument).data.read().is_valid()
    }

    /// Lock-free load of the per-key write counter.
    ///
    /// Acquire-ordered: a reader observing a new value here observes every
    /// field write of that generation through [`InstrumentCache::get`].
    #[must_use]
    pub fn sequence(&self, venue: Venue, instrument: InstrumentType) -> u64 {
        self.slot(venue, instrument).sequence.load(Ordering::Acquire)
    }

    /// Best bid of the cached book, `0.0` when absent
    #[must_use]
    pub fn best_bid(&self, venue: Venue, instrument: InstrumentType) -> f64 {
        self.slot(venue, instrument).data.read().best_bid()
    }

    /// Best ask of the cached book, `0.0` when absent
    #[must_use]
    pub fn best_ask(&self, venue: Venue, instrument: InstrumentType) -> f64 {
        self.slot(venue, instrument).data.read().best_ask()
    }

    /// Snapshot of every valid entry, for monitoring.
    ///
    /// Per-entry freshness only; no cross-key ordering is implied.
    #[must_use]
    pub fn snapshot(&self) -> Vec<InstrumentData> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let guard = slot.data.read();
                guard.is_valid().then(|| guard.clone())
            })
            .collect()
    }

    /// Number of entries holding a two-sided book
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.slots.iter().filter(|s| s.data.read().is_valid()).count()
    }

    /// Number of valid entries written within `max_age_ms`
    #[must_use]
    pub fn fresh_count(&self, max_age_ms: u64) -> usize {
        self.slots.iter().filter(|s| s.data.read().is_fresh(max_age_ms)).count()
    }

    // ------------------------------------------------------------------
    // Writes (exclusive lock per key)
    // ------------------------------------------------------------------

    /// Replace the whole entry.
    ///
    /// Stamps the timestamp, assigns the next per-key sequence, and fires
    /// the update callback after the lock is released.
    pub fn update(&self, venue: Venue, instrument: InstrumentType, mut data: InstrumentData) {
        let seq = self.write_with(venue, instrument, |entry| {
            data.book.timestamp = Ts::now();
            *entry = data;
        });
        trace!(venue = %venue, instrument = %instrument, seq, "cache update");
        self.notify(venue, instrument);
    }

    /// Replace just the book, refreshing `last_price` from its midpoint
    pub fn update_book(&self, venue: Venue, instrument: InstrumentType, book: OrderBook) {
        let seq = self.write_with(venue, instrument, |entry| {
            entry.book = book;
            entry.book.timestamp = Ts::now();
            entry.last_price = entry.book.mid_price();
        });
        trace!(venue = %venue, instrument = %instrument, seq, "book update");
        self.notify(venue, instrument);
    }

    /// Set the funding fields (perpetual/inverse)
    pub fn update_funding(
        &self,
        venue: Venue,
        instrument: InstrumentType,
        funding_rate: f64,
        next_funding_ts: i64,
    ) {
        self.write_with(venue, instrument, |entry| {
            entry.funding_rate = funding_rate;
            entry.next_funding_ts = next_funding_ts;
        });
    }

    /// Set the mark price, and the index price when one is supplied
    pub fn update_mark_price(
        &self,
        venue: Venue,
        instrument: InstrumentType,
        mark_price: f64,
        index_price: f64,
    ) {
        self.write_with(venue, instrument, |entry| {
            entry.mark_price = mark_price;
            if index_price > 0.0 {
                entry.index_price = index_price;
            }
        });
    }

    /// Set the option strike, side, Greeks, and implied vol when supplied
    pub fn update_greeks(
        &self,
        venue: Venue,
        strike: f64,
        is_call: bool,
        greeks: Greeks,
        implied_vol: f64,
    ) {
        self.write_with(venue, InstrumentType::Option, |entry| {
            entry.strike = strike;
            entry.is_call = is_call;
            entry.delta = greeks.delta;
            entry.gamma = greeks.gamma;
            entry.theta = greeks.theta;
            entry.vega = greeks.vega;
            entry.rho = greeks.rho;
            if implied_vol > 0.0 {
                entry.implied_vol = implied_vol;
            }
        });
    }

    /// Replace several instruments of one venue.
    ///
    /// Each entry is written under its own key lock; no cross-key atomicity
    /// is implied.
    pub fn update_batch(&self, venue: Venue, instruments: Vec<InstrumentData>) {
        for mut data in instruments {
            let instrument = data.instrument;
            self.write_with(venue, instrument, |entry| {
                data.book.timestamp = Ts::now();
                *entry = data;
            });
            self.notify(venue, instrument);
        }
    }

    /// Reset one entry to the default value.
    ///
    /// The per-key sequence still advances; the timestamp drops back to the
    /// never-written sentinel so the entry reads as stale.
    pub fn clear(&self, venue: Venue, instrument: InstrumentType) {
        let slot = self.slot(venue, instrument);
        let mut guard = slot.data.write();
        let seq = slot.sequence.load(Ordering::Relaxed) + 1;
        *guard = InstrumentData {
            instrument,
            sequence: seq,
            ..InstrumentData::default()
        };
        slot.sequence.store(seq, Ordering::Release);
    }

    /// Reset every instrument of one venue
    pub fn clear_venue(&self, venue: Venue) {
        for instrument in InstrumentType::ALL {
            self.clear(venue, instrument);
        }
    }

    /// Reset the whole cache
    pub fn clear_all(&self) {
        for venue in Venue::all() {
            self.clear_venue(venue);
        }
    }

    /// Install the update callback, replacing any previous one
    pub fn set_update_callback(&self, callback: UpdateCallback) {
        *self.on_update.write() = Some(callback);
    }

    // ------------------------------------------------------------------

    /// Exclusive write protocol: mutate under the key lock, stamp the entry,
    /// then publish the new sequence with release ordering so lock-free
    /// sequence readers observe a fully-written generation.
    fn write_with<F: FnOnce(&mut InstrumentData)>(
        &self,
        venue: Venue,
        instrument: InstrumentType,
        mutate: F,
    ) -> u64 {
        let slot = self.slot(venue, instrument);
        let mut guard = slot.data.write();
        let seq = slot.sequence.load(Ordering::Relaxed) + 1;
        mutate(&mut guard);
        guard.instrument = instrument;
        guard.timestamp = Ts::now();
        guard.sequence = seq;
        guard.book.sequence = seq;
        slot.sequence.store(seq, Ordering::Release);
        seq
    }

    /// Fire the callback with a fresh snapshot, after the key lock is back
    /// down. Book-level writes notify; field-level writes do not.
    fn notify(&self, venue: Venue, instrument: InstrumentType) {
        let callback = self.on_update.read().clone();
        if let Some(callback) = callback {
            let snapshot = self.get(venue, instrument);
            callback(venue, instrument, &snapshot);
        }
    }
}
