//! Background flooding and foreground component extraction.

use comic_tiles_core::color::{BLACK, FLOODED, WHITE};
use comic_tiles_core::{BoundingBox, Raster};
use serde::{Deserialize, Serialize};

use crate::flood::FloodFill;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One 4-connected foreground region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub bounds: BoundingBox,
    /// Number of pixels in the region.
    pub fill_count: u64,
}

impl Component {
    pub fn new(bounds: BoundingBox, fill_count: u64) -> Self {
        Self { bounds, fill_count }
    }

    /// Area of the bounding box.
    #[inline]
    pub fn area(&self) -> u64 {
        self.bounds.area()
    }

    /// Fraction of the bounding box covered by the region.
    #[inline]
    pub fn fill_ratio(&self) -> f64 {
        self.fill_count as f64 / self.area() as f64
    }
}

/// Flood every white region touching the border with [`FLOODED`].
///
/// White pixels enclosed by ink stay white. Returns the number of flooded
/// pixels.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(raster), fields(width = raster.width(), height = raster.height()))
)]
pub fn flood_background(raster: &mut Raster) -> u64 {
    let mut flood = FloodFill::for_raster(raster);
    let mut flooded = 0;
    for (x, y) in raster.border_pixels() {
        if raster.get(x, y) == WHITE {
            flooded += flood.fill(raster, x, y, WHITE, FLOODED).count;
        }
    }
    flooded
}

/// Map flooded background to [`BLACK`] and everything else to [`WHITE`].
pub fn invert_background(raster: &mut Raster) {
    raster.map_in_place(|v| if v == FLOODED { BLACK } else { WHITE });
}

/// Enumerate foreground components of a background-flooded raster.
///
/// The raster is inverted first, then each remaining white pixel seeds a
/// fill to [`BLACK`] in row-major order. Components come back in discovery
/// order and their pixel sets are disjoint; on return the raster is entirely
/// black.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(raster), fields(width = raster.width(), height = raster.height()))
)]
pub fn segment_foreground(raster: &mut Raster) -> Vec<Component> {
    invert_background(raster);

    let mut flood = FloodFill::for_raster(raster);
    let mut components = Vec::new();
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            if raster.get(x, y) != WHITE {
                continue;
            }
            let fill = flood.fill(raster, x, y, WHITE, BLACK);
            if let Some(bounds) = fill.bounds {
                components.push(Component::new(bounds, fill.count));
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binarize::binarize;

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
    fn enclosed_white_survives_background_flood() {
        let mut r = raster_from_rows(&[
            ".....", //
            ".###.",
            ".#.#.",
            ".###.",
            ".....",
        ]);
        let flooded = flood_background(&mut r);
        assert_eq!(flooded, 16);
        assert_eq!(r.get(2, 2), WHITE);
        assert_eq!(r.get(0, 0), FLOODED);
        assert_eq!(r.get(1, 1), BLACK);
    }

    #[test]
    fn trapped_background_joins_its_frame() {
        let mut r = raster_from_rows(&[
            ".....", //
            ".###.",
            ".#.#.",
            ".###.",
            ".....",
        ]);
        flood_background(&mut r);
        let comps = segment_foreground(&mut r);
        assert_eq!(comps, vec![Component::new(BoundingBox::new(1, 1, 3, 3), 9)]);
        assert!(r.as_slice().iter().all(|&v| v == BLACK));
    }

    #[test]
    fn components_in_scan_order() {
        let mut r = raster_from_rows(&[
            "......", //
            ".#..#.",
            "......",
            "..##..",
            "......",
        ]);
        flood_background(&mut r);
        let comps = segment_foreground(&mut r);
        let bounds: Vec<_> = comps.iter().map(|c| c.bounds).collect();
        assert_eq!(
            bounds,
            vec![
                BoundingBox::new(1, 1, 1, 1),
                BoundingBox::new(4, 1, 4, 1),
                BoundingBox::new(2, 3, 3, 3),
            ]
        );
    }

    #[test]
    fn ink_on_border_is_foreground() {
        let mut r = raster_from_rows(&[
            "##..", //
            "##..",
            "....",
        ]);
        flood_background(&mut r);
        let comps = segment_foreground(&mut r);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].fill_count, 4);
        assert!((comps[0].fill_ratio() - 1.0).abs() < 1e-12);
    }

    /// Deterministic noise so the partition check covers irregular shapes.
    fn noise_raster(width: usize, height: usize, seed: u64) -> Raster {
        let mut state = seed;
        let data = (0..width * height)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 56) as u8
            })
            .collect();
        Raster::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn every_pixel_is_background_or_in_one_component() {
        for seed in [1u64, 7, 42, 1234] {
            let mut r = noise_raster(64, 48, seed);
            binarize(&mut r, 110);
            let background = flood_background(&mut r);
            let comps = segment_foreground(&mut r);

            let foreground: u64 = comps.iter().map(|c| c.fill_count).sum();
            assert_eq!(background + foreground, r.area() as u64, "seed {seed}");
            for c in &comps {
                assert!(c.fill_count >= 1);
                assert!(c.fill_count <= c.area());
            }
        }
    }
}
