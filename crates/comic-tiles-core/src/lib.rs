//! Core types for comic panel detection.
//!
//! This crate is intentionally small: a byte raster with the three sample
//! colors the detector works with, an inclusive bounding box, and the logger
//! shared by the other `comic-tiles-*` crates. It does *not* depend on any
//! concrete image decoder.

mod geometry;
mod logger;
mod raster;

pub use geometry::BoundingBox;
pub use raster::{color, Raster, RasterError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
