/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixview_core::log::trace;
use pixview_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;
use crate::header::{read_header, PPMHeader, PPMVersion};
use crate::p3::decode_p3;
use crate::p6::decode_p6;
use crate::raster::RgbRaster;
use crate::tokens::Tokens;

/// An instance of a PPM decoder
///
/// The decoder can currently decode P3 and P6 formats
///
/// Every call parses from the start of the data, so calling
/// [`decode`](Self::decode) again after an error reports the same error.
pub struct PPMDecoder<'a> {
    data:    &'a [u8],
    header:  Option<PPMHeader>,
    options: DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pixview_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use pixview_ppm::pixview_core::options::DecoderOptions;
    /// use pixview_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P6 2 1 255\n");
    ///
    /// assert!(decoder.decode_headers().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            data,
            header: None,
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once does nothing after the first success.
    pub fn decode_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.header.is_none() {
            let mut tokens = Tokens::new(self.data);
            self.header = Some(read_header(&mut tokens, &self.options)?);
        }
        Ok(())
    }
    /// Return the image header or none if headers
    /// aren't decoded
    pub const fn header(&self) -> Option<PPMHeader> {
        self.header
    }
    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        match self.header {
            Some(header) => Some((header.width, header.height)),
            None => None
        }
    }
    /// Decode the image, returning its RGB pixels
    ///
    /// Nothing is returned unless every pixel was read, a short
    /// or malformed file is an error.
    pub fn decode(&mut self) -> Result<RgbRaster, PPMDecodeErrors> {
        let mut tokens = Tokens::new(self.data);

        let header = read_header(&mut tokens, &self.options)?;
        self.header = Some(header);

        let size = header.sample_count().ok_or(PPMDecodeErrors::LargeDimensions(
            usize::MAX,
            header.width.saturating_mul(header.height)
        ))?;

        let pixels = match header.version {
            PPMVersion::P3 => {
                trace!("Decoding ASCII samples");
                decode_p3(&header, &mut tokens, &self.options, size)?
            }
            PPMVersion::P6 => {
                trace!("Decoding {:?} raw samples", header.bit_depth());
                decode_p6(&header, tokens.stream_mut(), &self.options, size)?
            }
        };

        Ok(RgbRaster::new(header.width, header.height, pixels))
    }
}

#[cfg(test)]
mod tests {
    use pixview_core::options::DecoderOptions;

    use crate::{PPMDecodeErrors, PPMDecoder, PPMVersion};

    #[test]
    fn header_is_available_before_decoding() {
        let mut decoder = PPMDecoder::new(b"P3 4 5 15\n");

        assert!(decoder.header().is_none());
        assert!(decoder.dimensions().is_none());

        decoder.decode_headers().unwrap();
        decoder.decode_headers().unwrap();

        let header = decoder.header().unwrap();
        assert_eq!(header.version, PPMVersion::P3);
        assert_eq!(header.max_value, 15);
        assert_eq!(decoder.dimensions(), Some((4, 5)));
    }

    #[test]
    fn errors_repeat_on_every_call() {
        let mut decoder = PPMDecoder::new(b"P3 1 1\n");

        assert!(matches!(decoder.decode_headers(), Err(PPMDecodeErrors::MissingMaxValue)));
        assert!(matches!(decoder.decode(), Err(PPMDecodeErrors::MissingMaxValue)));
        assert!(matches!(decoder.decode(), Err(PPMDecodeErrors::MissingMaxValue)));
        assert!(decoder.header().is_none());
    }

    #[test]
    fn pixel_errors_repeat_on_every_call() {
        let mut decoder = PPMDecoder::new(b"P3 2 1 255\n1 2 3 4\n");

        for _ in 0..2 {
            assert!(matches!(
                decoder.decode(),
                Err(PPMDecodeErrors::TruncatedPixelData(6, 4))
            ));
        }
        assert_eq!(decoder.dimensions(), Some((2, 1)));
    }

    #[test]
    fn decoding_twice_gives_the_same_raster() {
        let mut decoder = PPMDecoder::new(b"P6 1 1 255\n\x01\x02\x03");

        let first = decoder.decode().unwrap();
        assert_eq!(first, decoder.decode().unwrap());
    }

    #[test]
    fn strict_mode_rejects_samples_above_max() {
        let data = b"P3 1 1 15\n16 0 0\n";

        let lenient = PPMDecoder::new(data).decode().unwrap();
        assert_eq!(lenient.pixels(), &[255, 0, 0]);

        let options = DecoderOptions::default().set_strict_mode(true);
        let strict = PPMDecoder::new_with_options(options, data).decode();
        assert!(matches!(strict, Err(PPMDecodeErrors::InvalidPixelValue(_))));
    }

    #[test]
    fn strict_mode_applies_to_binary_samples() {
        let data = b"P6 1 1 100\n\x65\x00\x00";

        assert_eq!(PPMDecoder::new(data).decode().unwrap().pixels(), &[255, 0, 0]);

        let options = DecoderOptions::default().set_strict_mode(true);
        let strict = PPMDecoder::new_with_options(options, data).decode();
        assert!(matches!(strict, Err(PPMDecodeErrors::InvalidPixelValue(_))));
    }
}
