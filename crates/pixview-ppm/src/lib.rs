/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! This crate decodes the ASCII (`P3`) and binary (`P6`) variants of
//! the PPM format into an 8 bit RGB raster, rescaling samples whose
//! declared maximum value is not 255.
//!
//! # Example
//! ```
//! use pixview_ppm::PPMDecoder;
//!
//! let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n10 20 30\n");
//! let raster = decoder.decode().unwrap();
//!
//! assert_eq!(raster.dimensions(), (1, 1));
//! assert_eq!(raster.pixels(), &[10, 20, 30]);
//! ```
//!
//! # Features
//! - `log`: Report header details through the [`log`](https://docs.rs/log) crate.
use std::fs;
use std::io::Read;
use std::path::Path;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::{PPMHeader, PPMVersion};
pub use pixview_core;
pub use raster::RgbRaster;
pub use scale::scale_sample;
use pixview_core::options::DecoderOptions;

mod decoder;
mod encoder;
mod errors;
mod header;
mod p3;
mod p6;
mod raster;
mod scale;
mod tokens;

/// Read the file at `path` and decode it as a PPM image
///
/// The file is read to completion and closed before parsing starts.
///
/// # Errors
/// [`PPMDecodeErrors::IoErrors`] if the file cannot be read, any other
/// variant if its contents are not a valid P3 or P6 image.
pub fn decode_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<RgbRaster, PPMDecodeErrors> {
    let data = fs::read(path)?;

    PPMDecoder::new_with_options(options, &data).decode()
}

/// Read `reader` to the end and decode the contents as a PPM image
pub fn decode_reader<R: Read>(
    mut reader: R, options: DecoderOptions
) -> Result<RgbRaster, PPMDecodeErrors> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    PPMDecoder::new_with_options(options, &data).decode()
}
