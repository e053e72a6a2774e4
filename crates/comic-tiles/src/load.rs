use std::path::Path;

use ::image::{GrayImage, ImageReader};

use crate::core::{Raster, RasterError};
use crate::detect::{DetectionResult, TileDetector};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced while turning an image file into a raster.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] ::image::ImageError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Copy an `image::GrayImage` into a [`Raster`].
pub fn raster_from_gray(img: &GrayImage) -> Result<Raster, LoadError> {
    Ok(Raster::from_raw(
        img.width() as usize,
        img.height() as usize,
        img.as_raw().clone(),
    )?)
}

/// Build an `image::GrayImage` from a raster, e.g. to save a debug dump.
pub fn gray_from_raster(raster: &Raster) -> Result<GrayImage, LoadError> {
    let (width, height) = (raster.width(), raster.height());
    let invalid = || RasterError::Dimensions { width, height };
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;
    Ok(GrayImage::from_raw(w, h, raster.as_slice().to_vec()).ok_or_else(invalid)?)
}

/// Open and decode an image file as a single-channel raster.
///
/// Color images are converted to luma.
#[cfg_attr(feature = "tracing", instrument(level = "debug"))]
pub fn load_raster(path: &Path) -> Result<Raster, LoadError> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = (img.width() as usize, img.height() as usize);
    Ok(Raster::from_raw(width, height, img.into_luma8().into_raw())?)
}

/// Load an image file and run the detector on it.
pub fn detect_file(path: &Path, detector: &TileDetector) -> Result<DetectionResult, LoadError> {
    let raster = load_raster(path)?;
    Ok(detector.detect(raster))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_round_trip() {
        let img = GrayImage::from_fn(7, 3, |x, y| ::image::Luma([(x * 10 + y) as u8]));
        let raster = raster_from_gray(&img).unwrap();
        assert_eq!((raster.width(), raster.height()), (7, 3));
        assert_eq!(raster.get(4, 2), 42);
        assert_eq!(gray_from_raster(&raster).unwrap(), img);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_raster(Path::new("/nonexistent/comic.png")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0001.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(load_raster(&path).is_err());
    }
}
