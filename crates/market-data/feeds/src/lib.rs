//! Snapshot parsers for venue order-book payloads
//!
//! Every venue speaks a different wire format; the core only consumes
//! normalized [`common::OrderBook`] values. A [`SnapshotParser`] turns opaque
//! bytes into a book through a [`BookAssembler`] that enforces the book
//! invariants as levels arrive: positive price and volume, per-side price
//! ordering, the level cap, and no crossed market.
//!
//! The parsers here cover a few representative wire shapes and double as the
//! cache's test collaborators; production transports bring their own.

#![deny(warnings)]
#![deny(clippy::all)]

pub mod assembler;
pub mod binance;
pub mod gate;
pub mod kraken;

pub use assembler::BookAssembler;
pub use binance::BinanceDepthParser;
pub use gate::GateDepthParser;
pub use kraken::KrakenDepthParser;

use common::{InstrumentType, OrderBook, Venue};

/// Why a payload could not become a normalized book
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Payload was not the expected JSON shape
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A numeric field did not parse
    #[error("bad number in payload: {0:?}")]
    BadNumber(String),

    /// A level carried a non-positive or non-finite price or volume
    #[error("invalid level: price {price}, volume {volume}")]
    InvalidLevel {
        /// Offending price
        price: f64,
        /// Offending volume
        volume: f64,
    },

    /// Levels arrived out of price order for the side
    #[error("{side} side out of price order at {price}")]
    OutOfOrder {
        /// `"bid"` or `"ask"`
        side: &'static str,
        /// Offending price
        price: f64,
    },

    /// Best bid at or above best ask in a single snapshot
    #[error("crossed book: bid {bid} >= ask {ask}")]
    Crossed {
        /// Best bid seen
        bid: f64,
        /// Best ask seen
        ask: f64,
    },

    /// The payload did not contain the requested market
    #[error("market {0:?} not in payload")]
    MissingMarket(String),

    /// The venue reported an application-level error
    #[error("venue error: {0}")]
    Venue(String),
}

/// Turns one venue's raw snapshot bytes into a normalized book.
///
/// Implementations are constructed per (venue, instrument) target and must
/// return books satisfying the invariants `BookAssembler` enforces, or a
/// typed error. Unknown identifiers are errors, never silent drops.
pub trait SnapshotParser: Send + Sync {
    /// Venue this parser decodes for
    fn venue(&self) -> Venue;

    /// Instrument class of the target market
    fn instrument(&self) -> InstrumentType;

    /// Decode a whole snapshot payload
    fn parse(&self, raw: &[u8]) -> Result<OrderBook, ParseError>;
}
