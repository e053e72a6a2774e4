//! High-level facade crate for the `comic-tiles-*` workspace.
//!
//! This crate provides:
//! - re-exports of the underlying crates
//! - (feature `image`) loading image files into rasters and batch detection
//!   over a data root, parallel across images
//! - (feature `cli`) the `comic-tiles` binary with `detect`, `merge` and
//!   `pending` subcommands
//!
//! ## Quickstart
//!
//! ```no_run
//! use comic_tiles::detect::{DetectorParams, TileDetector};
//! use comic_tiles::load::detect_file;
//! use comic_tiles::store::TileRecord;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = TileDetector::new(DetectorParams::default())?;
//! let result = detect_file(Path::new("comics/0001.png"), &detector)?;
//! TileRecord::from(&result).write("tiles_detected/0001.txt")?;
//! println!("{} tiles, valid: {}", result.tiles.len(), result.valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `comic_tiles::core`: raster, colors, bounding boxes, logger.
//! - `comic_tiles::detect`: binarize, flood fill, segmentation, classifier,
//!   ordering, validity gate and the `TileDetector` pipeline.
//! - `comic_tiles::store`: record files, data layout, merge, review queue.
//! - `comic_tiles::load`, `comic_tiles::batch` and `comic_tiles::report`
//!   (feature `image`).

pub use comic_tiles_core as core;
pub use comic_tiles_detect as detect;
pub use comic_tiles_store as store;

pub use comic_tiles_core::{BoundingBox, Raster};
pub use comic_tiles_detect::{DetectionResult, DetectorParams, TileDetector};
pub use comic_tiles_store::{DataLayout, TileRecord};

#[cfg(feature = "image")]
pub mod batch;
#[cfg(feature = "image")]
pub mod load;
#[cfg(feature = "image")]
pub mod report;
