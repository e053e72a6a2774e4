//! Reading order of accepted tiles.

use comic_tiles_core::BoundingBox;

/// Multiplier applied to `top` in the reading-order key.
pub const DEFAULT_ROW_BUCKET_WIDTH: u64 = 10;

/// Largest bucket width for which the key cannot overflow on any `u32` box.
pub const MAX_ROW_BUCKET_WIDTH: u64 = u32::MAX as u64;

/// Sort key `top * row_bucket_width + left`, saturating at `u64::MAX`.
#[inline]
pub fn reading_order_key(tile: &BoundingBox, row_bucket_width: u64) -> u64 {
    u64::from(tile.top)
        .saturating_mul(row_bucket_width)
        .saturating_add(u64::from(tile.left))
}

/// Sort tiles into reading order, in place. Ties keep discovery order.
///
/// With the default bucket width the key only separates rows whose tops
/// differ by more than `left / 10` pixels. On strips wider than a few panels
/// a panel far to the right can sort before the start of the next row. The
/// width is configurable so corpora with wide strips can raise it.
pub fn order_tiles(tiles: &mut [BoundingBox], row_bucket_width: u64) {
    tiles.sort_by_key(|t| reading_order_key(t, row_bucket_width));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<BoundingBox> {
        vec![
            BoundingBox::new(210, 220, 400, 400),
            BoundingBox::new(0, 0, 200, 200),
            BoundingBox::new(0, 220, 200, 400),
            BoundingBox::new(210, 0, 400, 200),
        ]
    }

    #[test]
    fn two_by_two_reads_row_major() {
        let mut tiles = grid();
        order_tiles(&mut tiles, DEFAULT_ROW_BUCKET_WIDTH);
        let lefts_tops: Vec<_> = tiles.iter().map(|t| (t.left, t.top)).collect();
        assert_eq!(lefts_tops, vec![(0, 0), (210, 0), (0, 220), (210, 220)]);
    }

    #[test]
    fn ordering_is_deterministic() {
        let mut a = grid();
        let mut b = grid();
        order_tiles(&mut a, DEFAULT_ROW_BUCKET_WIDTH);
        order_tiles(&mut b, DEFAULT_ROW_BUCKET_WIDTH);
        order_tiles(&mut b, DEFAULT_ROW_BUCKET_WIDTH);
        assert_eq!(a, b);
    }

    #[test]
    fn equal_keys_keep_discovery_order() {
        // 1*10 + 0 == 0*10 + 10
        let first = BoundingBox::new(0, 1, 5, 5);
        let second = BoundingBox::new(10, 0, 15, 5);
        let mut tiles = vec![first, second];
        order_tiles(&mut tiles, DEFAULT_ROW_BUCKET_WIDTH);
        assert_eq!(tiles, vec![first, second]);
    }

    #[test]
    fn huge_bucket_width_does_not_overflow() {
        let corner = BoundingBox::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(
            reading_order_key(&corner, MAX_ROW_BUCKET_WIDTH),
            u64::from(u32::MAX) * u64::from(u32::MAX) + u64::from(u32::MAX)
        );
        assert_eq!(reading_order_key(&corner, u64::MAX / 2), u64::MAX);

        let mut tiles = grid();
        order_tiles(&mut tiles, u64::MAX / 2);
        let lefts_tops: Vec<_> = tiles.iter().map(|t| (t.left, t.top)).collect();
        assert_eq!(lefts_tops, vec![(0, 0), (210, 0), (0, 220), (210, 220)]);
    }

    #[test]
    fn wide_strip_interleaves_rows_with_default_width() {
        let far_right_top_row = BoundingBox::new(900, 0, 1100, 200);
        let left_second_row = BoundingBox::new(0, 50, 200, 250);
        let mut tiles = vec![far_right_top_row, left_second_row];

        order_tiles(&mut tiles, DEFAULT_ROW_BUCKET_WIDTH);
        assert_eq!(tiles[0], left_second_row);

        order_tiles(&mut tiles, 10_000);
        assert_eq!(tiles[0], far_right_top_row);
    }
}
