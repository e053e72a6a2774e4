//! Tile detection pipeline.
//!
//! This module wires together binarization, background flooding, foreground
//! segmentation, classification, reading order and the validity gate.

mod error;
mod params;
mod pipeline;
mod result;

pub use error::ParamsError;
pub use params::{
    DetectorParams, DEFAULT_DOMINANT_TILE_FRACTION, DEFAULT_MIN_CONTENT_AREA,
    DEFAULT_MIN_FILL_RATIO, DEFAULT_MIN_TILE_AREA,
};
pub use pipeline::TileDetector;
pub use result::DetectionResult;
