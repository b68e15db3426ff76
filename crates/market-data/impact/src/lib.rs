//! Deterministic price-impact mathematics
//!
//! Pure functions over one side of a snapshot book: walk levels in order
//! until a hypothetical taker order fills or depth runs out, and derive the
//! execution-weighted price, fill, and percentage move. All arithmetic is
//! IEEE-754 double precision with no rounding of outputs.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod depth;
pub mod walk;

pub use depth::{cumulative_depth, CumulativeDepth, DepthLevel};
pub use walk::{
    buy_impact, exit_price, min_base_for_impact, sell_impact, total_depth, vwap_for_volume,
};
