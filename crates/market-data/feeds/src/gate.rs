//! Gate futures depth parser
//!
//! Wire shape:
//! `{"current": 1700000000.123, "asks": [{"p": "87001.0", "s": 150}, ...], "bids": [...]}`
//!
//! Sizes are integer contract counts; the parser scales them to base volume
//! with the configured contract multiplier.

use crate::assembler::{decimal, BookAssembler};
use crate::{ParseError, SnapshotParser};
use common::{InstrumentType, OrderBook, Venue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DepthSnapshot {
    #[serde(default)]
    #[allow(dead_code)]
    current: f64,
    bids: Vec<Level>,
    asks: Vec<Level>,
}

#[derive(Debug, Deserialize)]
struct Level {
    p: String,
    s: i64,
}

/// Parser for Gate-style futures depth snapshots
#[derive(Debug, Clone, Copy)]
pub struct GateDepthParser {
    venue: Venue,
    instrument: InstrumentType,
    /// Base asset per contract (Gate BTC futures: 0.0001)
    contract_multiplier: f64,
}

impl GateDepthParser {
    /// Parser targeting one Gate market
    #[must_use]
    pub const fn new(venue: Venue, instrument: InstrumentType, contract_multiplier: f64) -> Self {
        Self {
            venue,
            instrument,
            contract_multiplier,
        }
    }
}

impl SnapshotParser for GateDepthParser {
    fn venue(&self) -> Venue {
        self.venue
    }

    fn instrument(&self) -> InstrumentType {
        self.instrument
    }

    fn parse(&self, raw: &[u8]) -> Result<OrderBook, ParseError> {
        let snapshot: DepthSnapshot = serde_json::from_slice(raw)?;

        let mut assembler = BookAssembler::new();
        for level in &snapshot.bids {
            let volume = level.s as f64 * self.contract_multiplier;
            assembler.bid(decimal(&level.p)?, volume)?;
        }
        for level in &snapshot.asks {
            let volume = level.s as f64 * self.contract_multiplier;
            assembler.ask(decimal(&level.p)?, volume)?;
        }
        assembler.finish()
    }
}
