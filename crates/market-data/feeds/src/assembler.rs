//! Sink that builds a normalized book while enforcing its invariants

use crate::ParseError;
use common::{OrderBook, PriceLevel, MAX_LEVELS};

/// Accumulates levels in wire order and validates as it goes.
///
/// Push bids best-first (descending) and asks best-first (ascending), then
/// call [`BookAssembler::finish`]. Zero-volume levels are normalization
/// noise and are skipped; negative or non-finite numbers are errors. Levels
/// past [`MAX_LEVELS`] per side are truncated.
#[derive(Debug, Default)]
pub struct BookAssembler {
    book: OrderBook,
}

impl BookAssembler {
    /// Empty assembler with capacity for a full book
    #[must_use]
    pub fn new() -> Self {
        Self {
            book: OrderBook::with_capacity(),
        }
    }

    /// Append a bid level
    pub fn bid(&mut self, price: f64, volume: f64) -> Result<(), ParseError> {
        if let Some(level) = check_level(price, volume)? {
            if self.book.bids.len() >= MAX_LEVELS {
                return Ok(());
            }
            if let Some(last) = self.book.bids.last() {
                if price >= last.price {
                    return Err(ParseError::OutOfOrder { side: "bid", price });
                }
            }
            self.book.bids.push(level);
        }
        Ok(())
    }

    /// Append an ask level
    pub fn ask(&mut self, price: f64, volume: f64) -> Result<(), ParseError> {
        if let Some(level) = check_level(price, volume)? {
            if self.book.asks.len() >= MAX_LEVELS {
                return Ok(());
            }
            if let Some(last) = self.book.asks.last() {
                if price <= last.price {
                    return Err(ParseError::OutOfOrder { side: "ask", price });
                }
            }
            self.book.asks.push(level);
        }
        Ok(())
    }

    /// Validate the cross-side invariant and hand the book over.
    ///
    /// One-sided books pass; they surface downstream as "not available".
    pub fn finish(self) -> Result<OrderBook, ParseError> {
        let (bid, ask) = (self.book.best_bid(), self.book.best_ask());
        if self.book.is_valid() && bid >= ask {
            return Err(ParseError::Crossed { bid, ask });
        }
        Ok(self.book)
    }
}

/// `Ok(None)` drops a zero-volume level; errors reject garbage numbers
fn check_level(price: f64, volume: f64) -> Result<Option<PriceLevel>, ParseError> {
    if !price.is_finite() || !volume.is_finite() || price <= 0.0 || volume < 0.0 {
        return Err(ParseError::InvalidLevel { price, volume });
    }
    if volume == 0.0 {
        return Ok(None);
    }
    Ok(Some(PriceLevel::new(price, volume)))
}

/// Parse a decimal string field, mapping failures to [`ParseError::BadNumber`]
pub(crate) fn decimal(raw: &str) -> Result<f64, ParseError> {
    raw.parse::<f64>()
        .map_err(|_| ParseError::BadNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_levels_assemble() -> Result<(), ParseError> {
        let mut assembler = BookAssembler::new();
        assembler.bid(87000.0, 10.0)?;
        assembler.bid(86950.0, 15.0)?;
        assembler.ask(87010.0, 1.0)?;
        assembler.ask(87060.0, 1.0)?;

        let book = assembler.finish()?;
        assert!(book.is_valid());
        assert_eq!(book.bids.len(), 2);
        assert!(book.best_bid() < book.best_ask());
        Ok(())
    }

    #[test]
    fn zero_volume_levels_are_skipped() -> Result<(), ParseError> {
        let mut assembler = BookAssembler::new();
        assembler.bid(87000.0, 10.0)?;
        assembler.bid(86950.0, 0.0)?;
        assembler.bid(86900.0, 5.0)?;
        let book = assembler.finish()?;
        assert_eq!(book.bids.len(), 2);
        Ok(())
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let mut assembler = BookAssembler::new();
        assert!(matches!(
            assembler.bid(-1.0, 10.0),
            Err(ParseError::InvalidLevel { .. })
        ));
        assert!(matches!(
            assembler.ask(87000.0, f64::NAN),
            Err(ParseError::InvalidLevel { .. })
        ));
        assert!(matches!(
            assembler.ask(f64::INFINITY, 1.0),
            Err(ParseError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn misordered_sides_are_rejected() {
        let mut assembler = BookAssembler::new();
        assembler.bid(86950.0, 10.0).unwrap();
        assert!(matches!(
            assembler.bid(87000.0, 5.0),
            Err(ParseError::OutOfOrder { side: "bid", .. })
        ));

        let mut assembler = BookAssembler::new();
        assembler.ask(87010.0, 1.0).unwrap();
        assert!(matches!(
            assembler.ask(87010.0, 2.0),
            Err(ParseError::OutOfOrder { side: "ask", .. })
        ));
    }

    #[test]
    fn crossed_snapshot_is_rejected() {
        let mut assembler = BookAssembler::new();
        assembler.bid(87020.0, 1.0).unwrap();
        assembler.ask(87010.0, 1.0).unwrap();
        assert!(matches!(
            assembler.finish(),
            Err(ParseError::Crossed { .. })
        ));
    }

    #[test]
    fn levels_past_the_cap_are_truncated() -> Result<(), ParseError> {
        let mut assembler = BookAssembler::new();
        for i in 0..(MAX_LEVELS + 20) {
            assembler.bid(90_000.0 - i as f64, 1.0)?;
        }
        let book = assembler.finish()?;
        assert_eq!(book.bids.len(), MAX_LEVELS);
        Ok(())
    }

    #[test]
    fn one_sided_book_passes_finish() -> Result<(), ParseError> {
        let mut assembler = BookAssembler::new();
        assembler.bid(87000.0, 1.0)?;
        let book = assembler.finish()?;
        assert!(!book.is_valid());
        Ok(())
    }
}
