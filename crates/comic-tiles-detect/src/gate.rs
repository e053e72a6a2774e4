//! Decides whether a detection can be used without manual review.

use comic_tiles_core::BoundingBox;

/// A detection is trusted when it found tiles and either no free content, or
/// a first tile dominating the page (`area / total_area > dominant_fraction`).
///
/// `tiles` must already be in reading order; only the first one is weighed.
pub fn is_valid(
    tiles: &[BoundingBox],
    free_content: usize,
    total_area: u64,
    dominant_fraction: f64,
) -> bool {
    let Some(first) = tiles.first() else {
        return false;
    };
    free_content == 0 || first.area_fraction(total_area) > dominant_fraction
}

/// Share of accepted content that was left as free content.
pub fn free_content_fraction(free_content: usize, tiles: usize) -> f64 {
    let total = free_content + tiles;
    if total == 0 {
        return 0.0;
    }
    free_content as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FRACTION: f64 = 0.8;

    #[test]
    fn no_tiles_is_invalid() {
        assert!(!is_valid(&[], 0, 10_000, FRACTION));
        assert!(!is_valid(&[], 3, 10_000, FRACTION));
    }

    #[test]
    fn tiles_without_free_content_are_valid() {
        let tiles = [BoundingBox::new(0, 0, 9, 9), BoundingBox::new(20, 0, 29, 9)];
        assert!(is_valid(&tiles, 0, 1_000_000, FRACTION));
    }

    #[test]
    fn dominant_first_tile_tolerates_free_content() {
        // 85 x 100 of a 100 x 100 page
        let tiles = [BoundingBox::new(0, 0, 84, 99)];
        assert!(is_valid(&tiles, 4, 10_000, FRACTION));
    }

    #[test]
    fn half_page_tile_with_free_content_is_invalid() {
        let tiles = [BoundingBox::new(0, 0, 49, 99)];
        assert!(!is_valid(&tiles, 1, 10_000, FRACTION));
    }

    #[test]
    fn dominance_is_strict() {
        let tiles = [BoundingBox::new(0, 0, 79, 99)];
        assert!(!is_valid(&tiles, 1, 10_000, FRACTION));
    }

    #[test]
    fn only_first_tile_counts() {
        let tiles = [BoundingBox::new(0, 0, 9, 9), BoundingBox::new(0, 0, 99, 99)];
        assert!(!is_valid(&tiles, 1, 10_000, FRACTION));
    }

    #[test]
    fn free_fraction() {
        assert_relative_eq!(free_content_fraction(0, 0), 0.0);
        assert_relative_eq!(free_content_fraction(1, 3), 0.25);
    }
}
