/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

use pixview_core::bit_depth::BitDepth;
use pixview_core::log::{info, trace};
use pixview_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;
use crate::tokens::Tokens;

/// Number of channels in a pixmap, R, G and B
pub(crate) const PPM_COMPONENTS: usize = 3;

/// The pixmap variants understood by this crate
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersion {
    /// ASCII decimal samples
    P3,
    /// Raw big endian samples
    P6
}

impl Display for PPMVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P3 => write!(f, "P3"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// A validated pixmap header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PPMHeader {
    pub version:   PPMVersion,
    pub width:     usize,
    pub height:    usize,
    /// The declared maximum sample value, in `1..=65535`
    pub max_value: u16
}

impl PPMHeader {
    /// How many bytes a single P6 sample occupies
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::from_max_value(self.max_value)
    }

    /// Number of channel samples in the image, `width * height * 3`
    ///
    /// Returns `None` if that overflows a `usize`
    pub const fn sample_count(&self) -> Option<usize> {
        match self.width.checked_mul(self.height) {
            Some(pixels) => pixels.checked_mul(PPM_COMPONENTS),
            None => None
        }
    }
}

/// Parse a decimal token, `None` if it has a non digit or overflows
fn parse_decimal(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0_usize, |acc, &byte| {
        if byte.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(usize::from(byte - b'0'))
        } else {
            None
        }
    })
}

fn read_dimension(
    tokens: &mut Tokens, name: &str, limit: usize
) -> Result<usize, PPMDecodeErrors> {
    let token = tokens.next().ok_or(PPMDecodeErrors::MissingDimensions)?;

    let value = parse_decimal(token).ok_or_else(|| {
        let msg = format!(
            "{name} `{}` is not a decimal integer",
            String::from_utf8_lossy(token)
        );
        PPMDecodeErrors::InvalidDimensions(msg)
    })?;

    if value == 0 {
        let msg = format!("{name} cannot be zero");
        return Err(PPMDecodeErrors::InvalidDimensions(msg));
    }
    if value > limit {
        return Err(PPMDecodeErrors::LargeDimensions(limit, value));
    }
    Ok(value)
}

fn read_max_value(tokens: &mut Tokens) -> Result<u16, PPMDecodeErrors> {
    let token = tokens.next().ok_or(PPMDecodeErrors::MissingMaxValue)?;

    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        let msg = String::from_utf8_lossy(token).to_string();
        return Err(PPMDecodeErrors::InvalidMaxValue(msg));
    }
    // all digits, so failing to parse is overflow
    let value = parse_decimal(token).unwrap_or(usize::MAX);

    match u16::try_from(value) {
        Ok(max_value) if max_value > 0 => Ok(max_value),
        _ => Err(PPMDecodeErrors::MaxValueOutOfRange(value))
    }
}

/// Read a P3 or P6 header from the start of `tokens`
///
/// The magic number must be the very first bytes of the input, only the
/// tokens after it may be preceded by whitespace or comments.
///
/// On success the tokens are positioned right after the max value
/// token, for P6 the single terminating whitespace byte is consumed too
/// so the stream sits on the first pixel byte.
pub(crate) fn read_header(
    tokens: &mut Tokens, options: &DecoderOptions
) -> Result<PPMHeader, PPMDecodeErrors> {
    let magic = tokens.next_raw();

    let version = match magic {
        b"P3" => PPMVersion::P3,
        b"P6" => PPMVersion::P6,
        _ => {
            let found = String::from_utf8_lossy(magic).to_string();
            return Err(PPMDecodeErrors::BadMagicNumber(found));
        }
    };
    trace!("Magic number: {}", version);

    let width = read_dimension(tokens, "width", options.get_max_width())?;
    let height = read_dimension(tokens, "height", options.get_max_height())?;

    info!("Width: {}, height: {}", width, height);

    let max_value = read_max_value(tokens)?;

    info!("Max value: {}", max_value);

    if version == PPMVersion::P6 {
        tokens.skip_header_terminator();
    }

    Ok(PPMHeader {
        version,
        width,
        height,
        max_value
    })
}
