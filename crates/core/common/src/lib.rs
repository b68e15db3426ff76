//! Core types for the FluxQ trading core
//!
//! Pure data: the venue table, instrument classification, order book and
//! instrument snapshots, flow signals, and trade decisions. No I/O, no
//! locking; the cache and engine crates build on top of these.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(dead_code)]
#![deny(unused)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod book;
pub mod config;
pub mod instrument;
pub mod signal;
pub mod types;
pub mod venue;

pub use book::{OrderBook, PriceLevel, MAX_LEVELS};
pub use config::TradingConfig;
pub use instrument::{Greeks, InstrumentData, InstrumentMask, InstrumentType};
pub use signal::{BlockchainSignal, PriceImpact, TradeDecision};
pub use types::Ts;
pub use venue::{Venue, VenueConfig};
