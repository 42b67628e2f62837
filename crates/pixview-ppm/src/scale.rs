/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::PPMDecodeErrors;

/// Rescale a raw sample with declared maximum `max_value` to `0..=255`
///
/// The result is `raw * 255 / max_value` truncated toward zero, then
/// clamped to 255. When `max_value` is 255 the value is only clamped.
/// Samples larger than `max_value` clamp to 255.
///
/// Both the P3 and P6 readers use this, so identical samples decode
/// identically in either format.
///
/// `max_value` must be non-zero, the header reader guarantees this.
///
/// # Example
/// ```
/// use pixview_ppm::scale_sample;
///
/// assert_eq!(scale_sample(65535, 65535), 255);
/// assert_eq!(scale_sample(32768, 65535), 127);
/// assert_eq!(scale_sample(300, 255), 255);
/// ```
#[inline]
pub const fn scale_sample(raw: u32, max_value: u16) -> u8 {
    let value = if max_value == 255 || max_value == 0 {
        raw as u64
    } else {
        // u64 since raw can be any u32 in P3 files
        (raw as u64 * 255) / max_value as u64
    };
    clamp(value)
}

/// In strict mode, reject a sample that exceeds the declared maximum
pub(crate) fn check_sample(raw: u32, max_value: u16, strict: bool) -> Result<(), PPMDecodeErrors> {
    if strict && raw > u32::from(max_value) {
        let msg = format!("sample {raw} is greater than max value {max_value}");
        return Err(PPMDecodeErrors::InvalidPixelValue(msg));
    }
    Ok(())
}

#[inline(always)]
const fn clamp(value: u64) -> u8 {
    if value > 255 {
        255
    } else {
        value as u8
    }
}
