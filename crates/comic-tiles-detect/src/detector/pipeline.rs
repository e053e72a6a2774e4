use comic_tiles_core::Raster;
use log::{debug, info, warn};

use super::{DetectionResult, DetectorParams, ParamsError};
use crate::binarize::binarize;
use crate::classify::classify_all;
use crate::gate::is_valid;
use crate::order::order_tiles;
use crate::segment::{flood_background, segment_foreground};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Flood-fill panel detector.
///
/// Stages: binarize, flood the background from the border, extract the
/// remaining foreground components, classify them, order the tiles and run
/// the validity gate.
#[derive(Clone, Debug)]
pub struct TileDetector {
    params: DetectorParams,
}

impl TileDetector {
    /// Create a detector, rejecting out-of-range parameters.
    pub fn new(params: DetectorParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Detector parameters.
    #[inline]
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect tiles on a grayscale raster, consuming it.
    pub fn detect(&self, mut raster: Raster) -> DetectionResult {
        self.detect_in_place(&mut raster)
    }

    /// Detect tiles on a grayscale raster.
    ///
    /// The raster is used as scratch space and is entirely black on return.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, raster), fields(width = raster.width(), height = raster.height()))
    )]
    pub fn detect_in_place(&self, raster: &mut Raster) -> DetectionResult {
        let p = &self.params;
        let total_area = raster.area() as u64;
        if raster.is_empty() {
            warn!("empty raster, nothing to detect");
            return DetectionResult {
                tiles: Vec::new(),
                free_content: 0,
                artifacts: 0,
                total_area,
                valid: false,
            };
        }

        debug!("making image black and white (threshold {})", p.binarize_threshold);
        binarize(raster, p.binarize_threshold);

        debug!("flooding background");
        let background = flood_background(raster);

        debug!("abstracting foreground ({background} background pixels)");
        let components = segment_foreground(raster);

        debug!("classifying {} components", components.len());
        let mut classified = classify_all(&components, p);

        order_tiles(&mut classified.tiles, p.row_bucket_width);

        let valid = is_valid(
            &classified.tiles,
            classified.free_content,
            total_area,
            p.dominant_tile_fraction,
        );

        let result = DetectionResult {
            tiles: classified.tiles,
            free_content: classified.free_content,
            artifacts: classified.artifacts,
            total_area,
            valid,
        };

        for (i, tile) in result.tiles.iter().enumerate() {
            debug!("tile #{i}: {tile}");
        }
        info!(
            "{} tiles, {} free content, {} artifacts; {:.1}% of content is free, result is {}",
            result.tiles.len(),
            result.free_content,
            result.artifacts,
            100.0 * result.free_content_fraction(),
            if valid { "valid" } else { "not valid" }
        );

        result
    }
}
