/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Broad category of a decoding failure
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMErrorKind {
    /// The input is not a valid P3 or P6 image
    Format,
    /// The input could not be read
    Io
}

/// Possible errors that may occur during decoding
pub enum PPMDecodeErrors {
    /// The first token is not `P3` or `P6`
    ///
    /// Carries the token that was found, empty if the input had none.
    BadMagicNumber(String),
    /// Input ended before both width and height were read
    MissingDimensions,
    /// Width or height is not a positive decimal integer
    InvalidDimensions(String),
    /// Dimensions exceed the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the largest value allowed
    /// - 2nd argument is the value found
    LargeDimensions(usize, usize),
    /// Input ended before the maximum color value was read
    MissingMaxValue,
    /// The maximum color value is not a decimal integer
    InvalidMaxValue(String),
    /// The maximum color value is not in `1..=65535`
    MaxValueOutOfRange(usize),
    /// A P3 sample is not a non-negative decimal integer, or in strict
    /// mode, a sample exceeds the maximum color value
    InvalidPixelValue(String),
    /// The pixel data ends early
    ///
    /// # Arguments
    /// - 1st argument is the number of values we expected
    /// - 2nd argument is the number of values actually present
    TruncatedPixelData(usize, usize),
    /// The source could not be read
    IoErrors(io::Error)
}

impl PPMDecodeErrors {
    /// Return whether this is a format or an I/O error
    pub const fn kind(&self) -> PPMErrorKind {
        match self {
            Self::IoErrors(_) => PPMErrorKind::Io,
            _ => PPMErrorKind::Format
        }
    }
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadMagicNumber(found) => {
                writeln!(f, "Bad magic number, expected P3 or P6 but found `{found}`")
            }
            Self::MissingDimensions => {
                writeln!(f, "Missing dimensions, input ended before width and height")
            }
            Self::InvalidDimensions(val) => {
                writeln!(f, "Invalid dimensions, reason: {val}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::MissingMaxValue => {
                writeln!(f, "Missing max value, input ended before the max color value")
            }
            Self::InvalidMaxValue(val) => {
                writeln!(f, "Invalid max value `{val}`, expected a decimal integer")
            }
            Self::MaxValueOutOfRange(val) => {
                writeln!(f, "Max value out of range, expected 1..=65535 but found {val}")
            }
            Self::InvalidPixelValue(val) => {
                writeln!(f, "Invalid pixel value, reason: {val}")
            }
            Self::TruncatedPixelData(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} values but found {found}"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl From<io::Error> for PPMDecodeErrors {
    fn from(err: io::Error) -> Self {
        PPMDecodeErrors::IoErrors(err)
    }
}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    /// Pixel buffer length does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is the length expected from the dimensions
    /// - 2nd argument is the length of the buffer
    LengthMismatch(usize, usize),
    /// Width or height is zero
    ZeroDimensions,
    /// Writing to the sink failed
    IoErrors(io::Error)
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Data length does not match image dimensions, expected {expected} but found {found}"
                )
            }
            Self::ZeroDimensions => writeln!(f, "Cannot encode an image with a zero dimension"),
            Self::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PPMEncodeErrors {}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IoErrors(err)
    }
}
