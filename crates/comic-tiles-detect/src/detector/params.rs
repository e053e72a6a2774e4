use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::ParamsError;
use crate::binarize::DEFAULT_BINARIZE_THRESHOLD;
use crate::order::{DEFAULT_ROW_BUCKET_WIDTH, MAX_ROW_BUCKET_WIDTH};

/// Components with a smaller bounding box are artifacts.
pub const DEFAULT_MIN_CONTENT_AREA: u64 = 100;
/// Components with a smaller bounding box are free content.
pub const DEFAULT_MIN_TILE_AREA: u64 = 10_000;
/// Tiles must fill at least this share of their bounding box.
pub const DEFAULT_MIN_FILL_RATIO: f64 = 0.9;
/// Share of the page the first tile needs to outweigh free content.
pub const DEFAULT_DOMINANT_TILE_FRACTION: f64 = 0.8;

/// Configuration for the tile detector.
///
/// The area thresholds are in pixels and therefore depend on scan
/// resolution. Missing fields in a JSON config fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Samples strictly above this are background.
    pub binarize_threshold: u8,
    /// Bounding-box area below which a component is an artifact.
    pub min_content_area: u64,
    /// Bounding-box area below which a component is free content.
    pub min_tile_area: u64,
    /// Minimum `fill_count / area` for a tile.
    pub min_fill_ratio: f64,
    /// Validity gate: first-tile share of the page that excuses free content.
    pub dominant_tile_fraction: f64,
    /// Reading-order key is `top * row_bucket_width + left`.
    pub row_bucket_width: u64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            binarize_threshold: DEFAULT_BINARIZE_THRESHOLD,
            min_content_area: DEFAULT_MIN_CONTENT_AREA,
            min_tile_area: DEFAULT_MIN_TILE_AREA,
            min_fill_ratio: DEFAULT_MIN_FILL_RATIO,
            dominant_tile_fraction: DEFAULT_DOMINANT_TILE_FRACTION,
            row_bucket_width: DEFAULT_ROW_BUCKET_WIDTH,
        }
    }
}

impl DetectorParams {
    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(0.0..=1.0).contains(&self.min_fill_ratio) {
            return Err(ParamsError::invalid(
                "min_fill_ratio",
                format!("{} is outside [0, 1]", self.min_fill_ratio),
            ));
        }
        if !(0.0..=1.0).contains(&self.dominant_tile_fraction) {
            return Err(ParamsError::invalid(
                "dominant_tile_fraction",
                format!("{} is outside [0, 1]", self.dominant_tile_fraction),
            ));
        }
        if self.min_content_area > self.min_tile_area {
            return Err(ParamsError::invalid(
                "min_content_area",
                format!(
                    "{} exceeds min_tile_area {}",
                    self.min_content_area, self.min_tile_area
                ),
            ));
        }
        if self.row_bucket_width == 0 {
            return Err(ParamsError::invalid("row_bucket_width", "must be positive"));
        }
        if self.row_bucket_width > MAX_ROW_BUCKET_WIDTH {
            return Err(ParamsError::invalid(
                "row_bucket_width",
                format!("{} exceeds {MAX_ROW_BUCKET_WIDTH}", self.row_bucket_width),
            ));
        }
        Ok(())
    }

    /// Load and validate a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let raw = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&raw)?;
        params.validate()?;
        Ok(params)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
