/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Save decoded rasters as JPEG files
use std::fmt::{Debug, Formatter};
use std::fs;
use std::io;
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder, EncodingError};
use log::debug;
use pixview_ppm::RgbRaster;

/// Errors possible when exporting a JPEG
pub enum ExportErrors {
    /// Quality is not in `0..=100`, carries the given quality
    QualityOutOfRange(i64),
    /// JPEG dimensions are limited to 65535
    TooLargeDimensions(usize, usize),
    Encoder(EncodingError),
    IoErrors(io::Error)
}

impl Debug for ExportErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QualityOutOfRange(quality) => {
                writeln!(f, "Quality out of range, expected 0..=100 but found {quality}")
            }
            Self::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Too large dimensions {width}x{height}, JPEG is limited to {}x{}",
                    u16::MAX,
                    u16::MAX
                )
            }
            Self::Encoder(err) => writeln!(f, "{err}"),
            Self::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

impl From<EncodingError> for ExportErrors {
    fn from(err: EncodingError) -> Self {
        ExportErrors::Encoder(err)
    }
}

impl From<io::Error> for ExportErrors {
    fn from(err: io::Error) -> Self {
        ExportErrors::IoErrors(err)
    }
}

/// Encode `raster` as a baseline JPEG
///
/// `quality` must be in `0..=100`, 0 is treated as the lowest quality the
/// encoder supports.
pub fn encode_jpeg(raster: &RgbRaster, quality: i64) -> Result<Vec<u8>, ExportErrors> {
    let quality = u8::try_from(quality)
        .ok()
        .filter(|x| *x <= 100)
        .ok_or(ExportErrors::QualityOutOfRange(quality))?;

    let (width, height) = raster.dimensions();

    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(ExportErrors::TooLargeDimensions(width, height));
    };

    debug!("Encoding {}x{} JPEG at quality {}", width, height, quality);

    let mut jpeg_buf = Vec::new();
    let encoder = Encoder::new(&mut jpeg_buf, quality.max(1));
    encoder.encode(raster.pixels(), w, h, ColorType::Rgb)?;

    Ok(jpeg_buf)
}

/// Encode `raster` as JPEG and write it to `path`
///
/// Nothing is written if the quality or the dimensions are rejected.
pub fn save_jpeg<P: AsRef<Path>>(
    raster: &RgbRaster, path: P, quality: i64
) -> Result<(), ExportErrors> {
    let data = encode_jpeg(raster, quality)?;
    fs::write(path, data)?;

    Ok(())
}
