//! Cumulative depth profile of one book side

use common::PriceLevel;

/// One row of the cumulative depth profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthLevel {
    /// Level price
    pub price: f64,
    /// Resting volume at this level
    pub volume: f64,
    /// Volume available up to and including this level
    pub cumulative_volume: f64,
    /// Absolute percentage move from the top of the side to this level
    pub pct_drop: f64,
}

/// Lazy cumulative depth over the first `max_levels` levels of one side.
///
/// Finite and single-pass; collect it if you need to walk it twice.
#[must_use]
pub fn cumulative_depth(levels: &[PriceLevel], max_levels: usize) -> CumulativeDepth<'_> {
    CumulativeDepth {
        start_price: levels.first().map_or(0.0, |l| l.price),
        cumulative: 0.0,
        levels: levels.iter().take(max_levels),
    }
}

/// Iterator returned by [`cumulative_depth`]
#[derive(Debug, Clone)]
pub struct CumulativeDepth<'a> {
    start_price: f64,
    cumulative: f64,
    levels: std::iter::Take<std::slice::Iter<'a, PriceLevel>>,
}

impl Iterator for CumulativeDepth<'_> {
    type Item = DepthLevel;

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.levels.next()?;
        self.cumulative += level.volume;

        let pct_drop = if self.start_price > 0.0 {
            (self.start_price - level.price).abs() / self.start_price * 100.0
        } else {
            0.0
        };

        Some(DepthLevel {
            price: level.price,
            volume: level.volume,
            cumulative_volume: self.cumulative,
            pct_drop,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.levels.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn profile_accumulates_volume() {
        let bids = [
            PriceLevel::new(87000.0, 10.0),
            PriceLevel::new(86950.0, 15.0),
            PriceLevel::new(86900.0, 20.0),
        ];
        let rows: Vec<DepthLevel> = cumulative_depth(&bids, 50).collect();

        assert_eq!(rows.len(), 3);
        assert_relative_eq!(rows[0].cumulative_volume, 10.0);
        assert_relative_eq!(rows[0].pct_drop, 0.0);
        assert_relative_eq!(rows[2].cumulative_volume, 45.0);
        assert_relative_eq!(rows[2].pct_drop, 100.0 / 87000.0 * 100.0);
    }

    #[test]
    fn profile_is_bounded_by_max_levels() {
        let bids = [
            PriceLevel::new(87000.0, 10.0),
            PriceLevel::new(86950.0, 15.0),
            PriceLevel::new(86900.0, 20.0),
        ];
        assert_eq!(cumulative_depth(&bids, 2).count(), 2);
        assert_eq!(cumulative_depth(&[], 50).count(), 0);
    }

    #[test]
    fn ask_side_reports_absolute_move() {
        let asks = [PriceLevel::new(87010.0, 1.0), PriceLevel::new(87200.0, 5.0)];
        let rows: Vec<DepthLevel> = cumulative_depth(&asks, 50).collect();
        assert_relative_eq!(rows[1].pct_drop, 190.0 / 87010.0 * 100.0);
    }
}
