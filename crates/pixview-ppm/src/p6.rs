/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw binary pixel data
use pixview_core::bit_depth::BitDepth;
use pixview_core::bytestream::ZByteReader;
use pixview_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;
use crate::header::PPMHeader;
use crate::scale::{check_sample, scale_sample};

/// Read `size` raw samples from `stream`
///
/// The stream must sit at the first byte after the header.
/// One byte per sample is read for max values up to 255, two big
/// endian bytes otherwise. Bytes after the last sample are ignored.
///
/// Input length is checked before anything is allocated.
pub(crate) fn decode_p6(
    header: &PPMHeader, stream: &mut ZByteReader, options: &DecoderOptions, size: usize
) -> Result<Vec<u8>, PPMDecodeErrors> {
    let max_value = header.max_value;
    let strict = options.get_strict_mode();
    let depth = header.bit_depth();

    let bytes = size
        .checked_mul(depth.size_of())
        .ok_or(PPMDecodeErrors::LargeDimensions(usize::MAX, size))?;

    let remaining = stream.remaining();

    if remaining < bytes {
        return Err(PPMDecodeErrors::TruncatedPixelData(bytes, remaining));
    }
    let truncated = |_| PPMDecodeErrors::TruncatedPixelData(bytes, remaining);

    match depth {
        BitDepth::Eight => {
            let data = stream.get_as_ref(bytes).map_err(truncated)?;

            if max_value == 255 {
                // samples are already in range
                return Ok(data.to_vec());
            }
            data.iter()
                .map(|&raw| -> Result<u8, PPMDecodeErrors> {
                    check_sample(u32::from(raw), max_value, strict)?;
                    Ok(scale_sample(u32::from(raw), max_value))
                })
                .collect()
        }
        BitDepth::Sixteen => {
            let mut pixels = Vec::with_capacity(size);
            // 16 bit ppm is written in big-endian
            // i.e that's what is supported by netpbm
            for _ in 0..size {
                let raw = u32::from(stream.get_u16_be_err().map_err(truncated)?);

                check_sample(raw, max_value, strict)?;
                pixels.push(scale_sample(raw, max_value));
            }
            Ok(pixels)
        }
    }
}
