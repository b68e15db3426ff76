//! Flow-signal trade decision engine
//!
//! The critical path: an on-chain flow signal arrives, the cached book for
//! the target (venue, instrument) is read, the hypothetical taker walk is
//! priced, instrument-specific adjustments normalize impact and fees, and a
//! deterministic go/no-go comes back in single-digit microseconds. Rejects
//! are value-typed decisions, never errors; nothing on this path panics or
//! allocates beyond the snapshot copy.

#![deny(warnings)]
#![deny(clippy::all)]

pub mod adjust;
pub mod handler;
pub mod latency;

pub use adjust::{adjust, Adjusted};
pub use handler::SignalHandler;
pub use latency::{measure, LatencyReport};
