//! Iterative 4-connected flood fill.
//!
//! The engine keeps its own visited bitmap instead of relying on the sample
//! color alone, so each pixel enters the wavefront at most once per phase.
//! Colors still change `from -> to` exactly as the later stages expect.

use std::collections::VecDeque;

use comic_tiles_core::{BoundingBox, Raster};

/// Outcome of one fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fill {
    /// Number of pixels recolored.
    pub count: u64,
    /// Bounds of the recolored pixels, `None` when nothing was recolored.
    pub bounds: Option<BoundingBox>,
}

impl Fill {
    #[inline]
    fn record(&mut self, x: usize, y: usize) {
        let (x, y) = (x as u32, y as u32);
        self.count += 1;
        match &mut self.bounds {
            Some(b) => b.include(x, y),
            None => self.bounds = Some(BoundingBox::point(x, y)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Breadth-first flood fill bound to one raster size.
///
/// Reuse one engine for all fills of a phase. Call [`FloodFill::reset`]
/// before starting a phase with different colors on the same raster.
#[derive(Debug)]
pub struct FloodFill {
    width: usize,
    height: usize,
    visited: Vec<bool>,
    wavefront: VecDeque<(usize, usize)>,
}

impl FloodFill {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            visited: vec![false; width * height],
            wavefront: VecDeque::new(),
        }
    }

    pub fn for_raster(raster: &Raster) -> Self {
        Self::new(raster.width(), raster.height())
    }

    /// Forget every visited mark.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.wavefront.clear();
    }

    /// Recolor the `from`-colored region containing `(x, y)` to `to`.
    pub fn fill(&mut self, raster: &mut Raster, x: usize, y: usize, from: u8, to: u8) -> Fill {
        self.fill_with(raster, x, y, from, to, |_, _| {})
    }

    /// Like [`FloodFill::fill`], calling `on_pixel` for every recolored pixel
    /// in visiting order.
    pub fn fill_with(
        &mut self,
        raster: &mut Raster,
        x: usize,
        y: usize,
        from: u8,
        to: u8,
        mut on_pixel: impl FnMut(usize, usize),
    ) -> Fill {
        debug_assert_eq!((raster.width(), raster.height()), (self.width, self.height));

        let mut fill = Fill::default();
        if !raster.contains(x, y) {
            return fill;
        }

        self.wavefront.clear();
        self.enqueue(raster, x, y, from);

        while let Some((x, y)) = self.wavefront.pop_front() {
            if raster.get(x, y) != from {
                continue;
            }
            raster.set(x, y, to);
            fill.record(x, y);
            on_pixel(x, y);

            if x > 0 {
                self.enqueue(raster, x - 1, y, from);
            }
            if y > 0 {
                self.enqueue(raster, x, y - 1, from);
            }
            if x + 1 < self.width {
                self.enqueue(raster, x + 1, y, from);
            }
            if y + 1 < self.height {
                self.enqueue(raster, x, y + 1, from);
            }
        }

        fill
    }

    #[inline]
    fn enqueue(&mut self, raster: &Raster, x: usize, y: usize, from: u8) {
        let idx = raster.index(x, y);
        if !self.visited[idx] && raster.get(x, y) == from {
            self.visited[idx] = true;
            self.wavefront.push_back((x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comic_tiles_core::color::{BLACK, FLOODED, WHITE};

    fn raster_from_rows(rows: &[&str]) -> Raster {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let data = rows
            .iter()
            .flat_map(|r| r.bytes())
            .map(|b| if b == b'#' { BLACK } else { WHITE })
            .collect();
        Raster::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn fills_only_connected_region() {
        let mut r = raster_from_rows(&[
            "..#..", //
            "..#..",
            "###..",
            ".....",
        ]);
        let mut flood = FloodFill::for_raster(&r);
        let fill = flood.fill(&mut r, 0, 0, WHITE, FLOODED);
        assert_eq!(fill.count, 4);
        assert_eq!(fill.bounds, Some(BoundingBox::new(0, 0, 1, 1)));
        assert_eq!(r.get(0, 3), WHITE);
        assert_eq!(r.get(1, 1), FLOODED);
    }

    #[test]
    fn diagonal_neighbors_are_not_connected() {
        let mut r = raster_from_rows(&[
            ".#", //
            "#.",
        ]);
        let mut flood = FloodFill::for_raster(&r);
        let fill = flood.fill(&mut r, 0, 0, WHITE, FLOODED);
        assert_eq!(fill.count, 1);
        assert_eq!(r.get(1, 1), WHITE);
    }

    #[test]
    fn refill_of_flooded_region_visits_nothing() {
        let mut r = Raster::filled(8, 6, WHITE);
        let mut flood = FloodFill::for_raster(&r);
        let first = flood.fill(&mut r, 3, 3, WHITE, FLOODED);
        assert_eq!(first.count, 48);

        let mut produced = Vec::new();
        let second = flood.fill_with(&mut r, 3, 3, WHITE, FLOODED, |x, y| produced.push((x, y)));
        assert!(second.is_empty());
        assert_eq!(second.bounds, None);
        assert!(produced.is_empty());

        flood.reset();
        let third = flood.fill(&mut r, 0, 0, WHITE, FLOODED);
        assert!(third.is_empty());
    }

    #[test]
    fn seed_outside_raster_is_ignored() {
        let mut r = Raster::filled(2, 2, WHITE);
        let mut flood = FloodFill::for_raster(&r);
        assert!(flood.fill(&mut r, 5, 0, WHITE, FLOODED).is_empty());
        assert!(r.as_slice().iter().all(|&v| v == WHITE));
    }

    #[test]
    fn visit_order_is_breadth_first() {
        let mut r = Raster::filled(3, 1, WHITE);
        let mut flood = FloodFill::for_raster(&r);
        let mut order = Vec::new();
        flood.fill_with(&mut r, 1, 0, WHITE, BLACK, |x, _| order.push(x));
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn large_region_does_not_recurse() {
        let mut r = Raster::filled(1500, 1500, WHITE);
        let mut flood = FloodFill::for_raster(&r);
        let fill = flood.fill(&mut r, 0, 0, WHITE, FLOODED);
        assert_eq!(fill.count, 1500 * 1500);
        assert_eq!(fill.bounds, Some(BoundingBox::new(0, 0, 1499, 1499)));
    }
}
