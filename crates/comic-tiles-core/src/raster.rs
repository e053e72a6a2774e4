/// Sample values used by the detection stages once a raster is binarized.
pub mod color {
    /// Background (paper).
    pub const WHITE: u8 = 255;
    /// Foreground (ink).
    pub const BLACK: u8 = 0;
    /// Background reached from the image border.
    pub const FLOODED: u8 = 100;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("invalid raster buffer length (expected {expected} bytes, got {got})")]
    BufferLength { expected: usize, got: usize },
    #[error("invalid raster dimensions (width={width}, height={height})")]
    Dimensions { width: usize, height: usize },
}

/// Single-channel 8-bit raster, row-major, `len = width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Raster of the given size with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        let Some(expected) = width.checked_mul(height) else {
            return Err(RasterError::Dimensions { width, height });
        };
        if data.len() != expected {
            return Err(RasterError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of samples.
    #[inline]
    pub fn area(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Apply `f` to every sample in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(u8) -> u8) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Coordinates of the outermost ring of pixels, each listed once.
    ///
    /// Order: top row, bottom row, then left and right columns top to bottom.
    pub fn border_pixels(&self) -> impl Iterator<Item = (usize, usize)> {
        let (w, h) = (self.width, self.height);
        let top = (0..w).map(|x| (x, 0));
        let bottom = (0..w).filter(move |_| h > 1).map(move |x| (x, h - 1));
        let sides = (1..h.saturating_sub(1)).flat_map(move |y| {
            let right = (w > 1).then(|| (w - 1, y));
            std::iter::once((0, y)).chain(right)
        });
        top.chain(bottom)
            .chain(sides)
            .filter(move |_| w > 0 && h > 0)
    }
}
