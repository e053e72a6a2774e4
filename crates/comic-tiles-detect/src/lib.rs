//! Comic panel ("tile") detector built on top of `comic-tiles-core`.
//!
//! ## Quickstart
//!
//! ```
//! use comic_tiles_core::{color, Raster};
//! use comic_tiles_detect::{DetectorParams, TileDetector};
//!
//! let raster = Raster::filled(64, 64, color::WHITE);
//! let detector = TileDetector::new(DetectorParams::default()).unwrap();
//! let result = detector.detect(raster);
//! assert!(result.needs_review());
//! ```
//!
//! Algorithm:
//! 1. Binarize with a fixed threshold (`> 220` is paper).
//! 2. Flood every white region touching the border; what is left is ink or
//!    background trapped inside ink.
//! 3. Flood each remaining region to get its bounding box and pixel count.
//! 4. Small regions are artifacts; mid-size or sparse ones are free content;
//!    the rest are tiles.
//! 5. Sort tiles by `top * 10 + left`.
//! 6. Trust the result if there are tiles and either no free content or a
//!    first tile covering more than 80% of the page.

pub mod binarize;
pub mod classify;
mod detector;
pub mod flood;
pub mod gate;
pub mod order;
pub mod segment;

pub use binarize::{binarize, DEFAULT_BINARIZE_THRESHOLD};
pub use classify::{classify, classify_all, Classification, Classified};
pub use detector::{
    DetectionResult, DetectorParams, ParamsError, TileDetector, DEFAULT_DOMINANT_TILE_FRACTION,
    DEFAULT_MIN_CONTENT_AREA, DEFAULT_MIN_FILL_RATIO, DEFAULT_MIN_TILE_AREA,
};
pub use flood::{Fill, FloodFill};
pub use gate::{free_content_fraction, is_valid};
pub use order::{
    order_tiles, reading_order_key, DEFAULT_ROW_BUCKET_WIDTH, MAX_ROW_BUCKET_WIDTH,
};
pub use segment::{flood_background, invert_background, segment_foreground, Component};
