//! Binance REST depth snapshot parser
//!
//! Wire shape:
//! `{"lastUpdateId": 1027024, "bids": [["87000.10","1.50"], ...], "asks": [...]}`

use crate::assembler::{decimal, BookAssembler};
use crate::{ParseError, SnapshotParser};
use common::{InstrumentType, OrderBook, Venue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DepthSnapshot {
    #[serde(rename = "lastUpdateId")]
    #[allow(dead_code)]
    last_update_id: u64,
    bids: Vec<[String; 2]>,
    asks: Vec<[String; 2]>,
}

/// Parser for Binance-family depth snapshots (spot and USD-M futures share
/// the shape)
#[derive(Debug, Clone, Copy)]
pub struct BinanceDepthParser {
    venue: Venue,
    instrument: InstrumentType,
}

impl BinanceDepthParser {
    /// Parser targeting one Binance-family market
    #[must_use]
    pub const fn new(venue: Venue, instrument: InstrumentType) -> Self {
        Self { venue, instrument }
    }
}

impl SnapshotParser for BinanceDepthParser {
    fn venue(&self) -> Venue {
        self.venue
    }

    fn instrument(&self) -> InstrumentType {
        self.instrument
    }

    fn parse(&self, raw: &[u8]) -> Result<OrderBook, ParseError> {
        let snapshot: DepthSnapshot = serde_json::from_slice(raw)?;

        let mut assembler = BookAssembler::new();
        for [price, volume] in &snapshot.bids {
            assembler.bid(decimal(price)?, decimal(volume)?)?;
        }
        for [price, volume] in &snapshot.asks {
            assembler.ask(decimal(price)?, decimal(volume)?)?;
        }
        assembler.finish()
    }
}
