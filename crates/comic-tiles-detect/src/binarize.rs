//! Fixed-threshold binarization.

use comic_tiles_core::{color, Raster};

/// Samples strictly brighter than this become background.
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 220;

/// Turn a grayscale raster into a two-level one, in place.
///
/// `v > threshold` maps to [`color::WHITE`], everything else to
/// [`color::BLACK`]. The threshold is not derived from the image histogram;
/// scans with grey paper need a lower value passed in explicitly.
pub fn binarize(raster: &mut Raster, threshold: u8) {
    raster.map_in_place(|v| if v > threshold { color::WHITE } else { color::BLACK });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let mut r = Raster::from_raw(4, 1, vec![0, 220, 221, 255]).unwrap();
        binarize(&mut r, DEFAULT_BINARIZE_THRESHOLD);
        assert_eq!(
            r.as_slice(),
            &[color::BLACK, color::BLACK, color::WHITE, color::WHITE]
        );
    }

    #[test]
    fn output_is_two_level() {
        let data: Vec<u8> = (0..=255).collect();
        let mut r = Raster::from_raw(16, 16, data).unwrap();
        binarize(&mut r, 127);
        assert!(r
            .as_slice()
            .iter()
            .all(|&v| v == color::WHITE || v == color::BLACK));
        assert_eq!(
            r.as_slice().iter().filter(|&&v| v == color::WHITE).count(),
            128
        );
    }
}
