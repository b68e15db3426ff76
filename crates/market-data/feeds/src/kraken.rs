//! Kraken REST depth parser
//!
//! Wire shape:
//! `{"error": [], "result": {"XXBTZUSD": {"bids": [["87000.0","1.5",1700000000], ...], "asks": [...]}}}`
//!
//! The result map is keyed by Kraken's own pair notation; the parser is
//! constructed with the pair it expects and rejects payloads without it.

use crate::assembler::{decimal, BookAssembler};
use crate::{ParseError, SnapshotParser};
use common::{InstrumentType, OrderBook, Venue};
use rustc_hash::FxHashMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DepthResponse {
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    result: FxHashMap<String, PairDepth>,
}

#[derive(Debug, Deserialize)]
struct PairDepth {
    bids: Vec<(String, String, i64)>,
    asks: Vec<(String, String, i64)>,
}

/// Parser for Kraken spot depth responses
#[derive(Debug, Clone)]
pub struct KrakenDepthParser {
    venue: Venue,
    instrument: InstrumentType,
    pair: String,
}

impl KrakenDepthParser {
    /// Parser expecting `pair` in the result map (e.g. `"XXBTZUSD"`)
    #[must_use]
    pub fn new(venue: Venue, instrument: InstrumentType, pair: impl Into<String>) -> Self {
        Self {
            venue,
            instrument,
            pair: pair.into(),
        }
    }
}

impl SnapshotParser for KrakenDepthParser {
    fn venue(&self) -> Venue {
        self.venue
    }

    fn instrument(&self) -> InstrumentType {
        self.instrument
    }

    fn parse(&self, raw: &[u8]) -> Result<OrderBook, ParseError> {
        let response: DepthResponse = serde_json::from_slice(raw)?;
        if let Some(message) = response.error.first() {
            return Err(ParseError::Venue(message.clone()));
        }
        let depth = response
            .result
            .get(&self.pair)
            .ok_or_else(|| ParseError::MissingMarket(self.pair.clone()))?;

        let mut assembler = BookAssembler::new();
        for (price, volume, _ts) in &depth.bids {
            assembler.bid(decimal(price)?, decimal(volume)?)?;
        }
        for (price, volume, _ts) in &depth.asks {
            assembler.ask(decimal(price)?, decimal(volume)?)?;
        }
        assembler.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &[u8] = br#"{
        "error": [],
        "result": {
            "XXBTZUSD": {
                "bids": [["87000.00000", "1.500", 1700000000], ["86995.00000", "0.400", 1700000000]],
                "asks": [["87001.00000", "0.750", 1700000001]]
            }
        }
    }"#;

    fn parser() -> KrakenDepthParser {
        KrakenDepthParser::new(Venue::Kraken, InstrumentType::Spot, "XXBTZUSD")
    }

    #[test]
    fn parses_the_requested_pair() -> Result<(), ParseError> {
        let book = parser().parse(PAYLOAD)?;
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.asks.len(), 1);
        assert!((book.best_bid() - 87000.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn missing_pair_is_a_typed_error() {
        let parser = KrakenDepthParser::new(Venue::Kraken, InstrumentType::Spot, "XETHZUSD");
        assert!(matches!(
            parser.parse(PAYLOAD),
            Err(ParseError::MissingMarket(pair)) if pair == "XETHZUSD"
        ));
    }

    #[test]
    fn venue_errors_are_surfaced() {
        let raw = br#"{"error": ["EGeneral:Invalid arguments"], "result": {}}"#;
        assert!(matches!(parser().parse(raw), Err(ParseError::Venue(_))));
    }
}
