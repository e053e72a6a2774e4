use comic_tiles_core::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::gate::free_content_fraction;

/// Output of one detection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Accepted tiles in reading order.
    pub tiles: Vec<BoundingBox>,
    pub free_content: usize,
    pub artifacts: usize,
    /// Pixel count of the source raster.
    pub total_area: u64,
    /// Verdict of the validity gate.
    pub valid: bool,
}

impl DetectionResult {
    /// The result must go through manual annotation before use.
    #[inline]
    pub fn needs_review(&self) -> bool {
        !self.valid
    }

    /// Share of content (tiles + free content) that is free content.
    pub fn free_content_fraction(&self) -> f64 {
        free_content_fraction(self.free_content, self.tiles.len())
    }

    /// Page share of the first tile, 0 when there is none.
    pub fn first_tile_fraction(&self) -> f64 {
        self.tiles
            .first()
            .map_or(0.0, |t| t.area_fraction(self.total_area))
    }
}
