/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! ASCII pixel data
use pixview_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;
use crate::header::PPMHeader;
use crate::scale::{check_sample, scale_sample};
use crate::tokens::Tokens;

/// Parse an ASCII sample
///
/// Values too large for a `u32` saturate, they clamp to 255 later on anyway.
fn parse_sample(token: &[u8]) -> Result<u32, PPMDecodeErrors> {
    let mut value = 0_u32;

    for &byte in token {
        if !byte.is_ascii_digit() {
            let msg = format!(
                "`{}` is not a non-negative integer",
                String::from_utf8_lossy(token)
            );
            return Err(PPMDecodeErrors::InvalidPixelValue(msg));
        }
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'));
    }
    Ok(value)
}

/// Read `size` decimal samples from `tokens`
///
/// Each sample takes at least a byte of input, so the buffer is reserved
/// up front but never beyond what the remaining input could fill.
/// Tokens remaining after the last sample are not looked at.
pub(crate) fn decode_p3(
    header: &PPMHeader, tokens: &mut Tokens, options: &DecoderOptions, size: usize
) -> Result<Vec<u8>, PPMDecodeErrors> {
    let max_value = header.max_value;
    let strict = options.get_strict_mode();

    let mut pixels = Vec::with_capacity(size.min(tokens.stream_mut().remaining()));

    while pixels.len() < size {
        let token = tokens
            .next()
            .ok_or(PPMDecodeErrors::TruncatedPixelData(size, pixels.len()))?;

        let raw = parse_sample(token)?;

        check_sample(raw, max_value, strict)?;
        pixels.push(scale_sample(raw, max_value));
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use crate::p3::parse_sample;
    use crate::PPMDecodeErrors;

    #[test]
    fn samples() {
        assert_eq!(parse_sample(b"0").unwrap(), 0);
        assert_eq!(parse_sample(b"00255").unwrap(), 255);
        assert_eq!(parse_sample(b"99999999999999").unwrap(), u32::MAX);
    }

    #[test]
    fn malformed_samples() {
        for token in [&b"-1"[..], b"1.5", b"0x10", b"+3", b"12a"] {
            assert!(matches!(
                parse_sample(token),
                Err(PPMDecodeErrors::InvalidPixelValue(_))
            ));
        }
    }
}
