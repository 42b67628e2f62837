/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A decoded 8 bit RGB image
///
/// Pixels are stored row major, three interleaved bytes per pixel
/// in R, G, B order. The buffer always holds exactly
/// `width * height * 3` bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RgbRaster {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl RgbRaster {
    /// `pixels` must already hold `width * height * 3` bytes
    pub(crate) fn new(width: usize, height: usize, pixels: Vec<u8>) -> RgbRaster {
        debug_assert_eq!(pixels.len(), width * height * 3);

        RgbRaster {
            width,
            height,
            pixels
        }
    }

    /// Wrap an existing RGB buffer
    ///
    /// Returns `None` if `pixels.len()` is not `width * height * 3`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> Option<RgbRaster> {
        let expected = width.checked_mul(height)?.checked_mul(3)?;

        if pixels.len() != expected {
            return None;
        }
        Some(RgbRaster {
            width,
            height,
            pixels
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Return the pixel at `(x, y)` or `None` if out of bounds
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 3;
        let rgb = self.pixels.get(start..start + 3)?;

        Some([rgb[0], rgb[1], rgb[2]])
    }

    /// Consume the raster, returning the underlying buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use crate::raster::RgbRaster;

    #[test]
    fn length_must_match() {
        assert!(RgbRaster::from_pixels(2, 2, vec![0; 11]).is_none());
        assert!(RgbRaster::from_pixels(usize::MAX, 2, vec![]).is_none());
        assert!(RgbRaster::from_pixels(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let raster = RgbRaster::from_pixels(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(raster.get_pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(raster.get_pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(raster.get_pixel(2, 0), None);
        assert_eq!(raster.get_pixel(0, 1), None);
    }
}
