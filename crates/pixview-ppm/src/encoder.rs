/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use pixview_core::log::trace;

use crate::errors::PPMEncodeErrors;
use crate::header::{PPMVersion, PPM_COMPONENTS};
use crate::raster::RgbRaster;

/// Samples per line when writing ASCII pixmaps
///
/// Keeps lines under the 70 characters netpbm recommends.
const P3_SAMPLES_PER_LINE: usize = 15;

/// A PPM encoder
///
/// Writes 8 bit RGB data with a max value of 255, either
/// as ASCII (`P3`) or raw bytes (`P6`).
pub struct PPMEncoder<'a> {
    data:    &'a [u8],
    width:   usize,
    height:  usize,
    version: PPMVersion
}

impl<'a> PPMEncoder<'a> {
    /// Create a new encoder for interleaved RGB `data`
    ///
    /// The encoder writes P6 unless told otherwise via [`set_version`](Self::set_version)
    pub fn new(data: &'a [u8], width: usize, height: usize) -> PPMEncoder<'a> {
        PPMEncoder {
            data,
            width,
            height,
            version: PPMVersion::P6
        }
    }

    /// Create an encoder for a decoded raster
    pub fn from_raster(raster: &'a RgbRaster) -> PPMEncoder<'a> {
        PPMEncoder::new(raster.pixels(), raster.width(), raster.height())
    }

    /// Set the pixmap variant to write
    #[must_use]
    pub const fn set_version(mut self, version: PPMVersion) -> Self {
        self.version = version;
        self
    }

    fn check_dimensions(&self) -> Result<(), PPMEncodeErrors> {
        if self.width == 0 || self.height == 0 {
            return Err(PPMEncodeErrors::ZeroDimensions);
        }
        let expected = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(PPM_COMPONENTS);

        if expected != self.data.len() {
            return Err(PPMEncodeErrors::LengthMismatch(expected, self.data.len()));
        }
        Ok(())
    }

    /// Encode the image into `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<usize, PPMEncodeErrors> {
        self.check_dimensions()?;

        let header = format!("{}\n{} {}\n255\n", self.version, self.width, self.height);
        sink.write_all(header.as_bytes())?;

        let mut written = header.len();

        trace!("Writing {} pixmap of {}x{}", self.version, self.width, self.height);

        match self.version {
            PPMVersion::P6 => {
                sink.write_all(self.data)?;
                written += self.data.len();
            }
            PPMVersion::P3 => {
                let mut line = String::with_capacity(P3_SAMPLES_PER_LINE * 4);

                for chunk in self.data.chunks(P3_SAMPLES_PER_LINE) {
                    line.clear();

                    for (i, sample) in chunk.iter().enumerate() {
                        if i != 0 {
                            line.push(' ');
                        }
                        line.push_str(&sample.to_string());
                    }
                    line.push('\n');

                    sink.write_all(line.as_bytes())?;
                    written += line.len();
                }
            }
        }
        Ok(written)
    }

    /// Encode the image into a new buffer
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PPMEncodeErrors> {
        let mut sink = Vec::with_capacity(self.data.len() + 20);
        self.encode(&mut sink)?;

        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use crate::{PPMDecoder, PPMEncodeErrors, PPMEncoder, PPMVersion};

    #[test]
    fn writes_p6_header_and_bytes() {
        let data = [255, 0, 0, 0, 255, 0];
        let encoded = PPMEncoder::new(&data, 2, 1).encode_to_vec().unwrap();

        assert_eq!(&encoded[..11], b"P6\n2 1\n255\n");
        assert_eq!(&encoded[11..], &data);
    }

    #[test]
    fn writes_p3_text() {
        let data = [1, 2, 3, 40, 50, 60];
        let encoded = PPMEncoder::new(&data, 1, 2)
            .set_version(PPMVersion::P3)
            .encode_to_vec()
            .unwrap();

        assert_eq!(encoded, b"P3\n1 2\n255\n1 2 3 40 50 60\n");
    }

    #[test]
    fn p3_lines_are_wrapped() {
        let data = vec![255_u8; 3 * 10];
        let encoded = PPMEncoder::new(&data, 10, 1)
            .set_version(PPMVersion::P3)
            .encode_to_vec()
            .unwrap();

        let text = String::from_utf8(encoded).unwrap();
        assert!(text.lines().all(|line| line.len() <= 70));

        let raster = PPMDecoder::new(text.as_bytes()).decode().unwrap();
        assert_eq!(raster.pixels(), &data[..]);
    }

    #[test]
    fn rejects_bad_lengths() {
        let data = [0_u8; 5];

        assert!(matches!(
            PPMEncoder::new(&data, 2, 1).encode_to_vec(),
            Err(PPMEncodeErrors::LengthMismatch(6, 5))
        ));
        assert!(matches!(
            PPMEncoder::new(&[], 0, 1).encode_to_vec(),
            Err(PPMEncodeErrors::ZeroDimensions)
        ));
    }

    #[test]
    fn reports_bytes_written() {
        let data = [7_u8; 3];
        let mut sink = Vec::new();
        let written = PPMEncoder::new(&data, 1, 1).encode(&mut sink).unwrap();

        assert_eq!(written, sink.len());
    }
}
