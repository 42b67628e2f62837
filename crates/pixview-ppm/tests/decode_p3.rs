/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pixview_ppm::{PPMDecodeErrors, PPMDecoder, PPMErrorKind};

fn decode(data: &[u8]) -> Result<Vec<u8>, PPMDecodeErrors> {
    PPMDecoder::new(data).decode().map(|raster| raster.into_pixels())
}

#[test]
fn test_two_by_two() {
    let data = b"P3\n2 2\n255\n255 0 0  0 255 0\n0 0 255  255 255 255\n";
    let raster = PPMDecoder::new(data).decode().unwrap();

    assert_eq!(raster.dimensions(), (2, 2));
    assert_eq!(
        raster.pixels(),
        &[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]
    );
    assert_eq!(raster.get_pixel(1, 1), Some([255, 255, 255]));
}

#[test]
fn test_comments_do_not_change_header() {
    let plain = b"P3 2 1 255 1 2 3 4 5 6";
    let commented = b"P3 # magic\n# size below\n2 # width\n1\n#max\n255\n1 2 3 4 5 6\n";

    let mut a = PPMDecoder::new(plain);
    let mut b = PPMDecoder::new(commented);

    a.decode_headers().unwrap();
    b.decode_headers().unwrap();

    assert_eq!(a.header(), b.header());
    assert_eq!(decode(plain).unwrap(), decode(commented).unwrap());
}

#[test]
fn test_whitespace_variants() {
    let data = b"P3\r\n1\t1\x0b255\x0c\r\n  9\n\n 8 \t7";

    assert_eq!(decode(data).unwrap(), &[9, 8, 7]);
}

#[test]
fn test_small_max_value_scales_up() {
    let data = b"P3 2 1 15\n15 0 7\n1 15 0\n";

    assert_eq!(decode(data).unwrap(), &[255, 0, 119, 17, 255, 0]);
}

#[test]
fn test_wide_max_value() {
    let data = b"P3 1 1 65535\n65535 32768 0\n";

    assert_eq!(decode(data).unwrap(), &[255, 127, 0]);
}

#[test]
fn test_wide_max_value_is_monotonic() {
    let mut rand = WyRand::new_seed(0x7033);

    for _ in 0..64 {
        let max_value = rand.generate_range(256_u16..=65535);

        let mut raw = (0..3)
            .map(|_| rand.generate_range(0..=max_value))
            .collect::<Vec<u16>>();
        raw.sort_unstable();

        let data = format!("P3 1 1 {max_value}\n{} {} {}\n", raw[0], raw[1], raw[2]);
        let pixels = decode(data.as_bytes()).unwrap();

        assert!(pixels[0] <= pixels[1] && pixels[1] <= pixels[2]);
        if raw[2] == max_value {
            assert_eq!(pixels[2], 255);
        }
        if raw[0] == 0 {
            assert_eq!(pixels[0], 0);
        }
    }
}

#[test]
fn test_truncated_tokens() {
    let data = b"P3 2 2 255\n255 0 0 0 255 0\n0 0 255\n";
    let err = decode(data).unwrap_err();

    assert_eq!(err.kind(), PPMErrorKind::Format);
    assert!(matches!(err, PPMDecodeErrors::TruncatedPixelData(12, 9)));
}

#[test]
fn test_header_only() {
    let err = decode(b"P3 1 1 255").unwrap_err();

    assert!(matches!(err, PPMDecodeErrors::TruncatedPixelData(3, 0)));
}

#[test]
fn test_trailing_tokens_are_ignored() {
    let data = b"P3 1 1 255\n1 2 3\n4 5 6 garbage # comment\n";

    assert_eq!(decode(data).unwrap(), &[1, 2, 3]);
}

#[test]
fn test_malformed_sample() {
    let data = b"P3 1 1 255\n1 -2 3\n";

    assert!(matches!(
        decode(data),
        Err(PPMDecodeErrors::InvalidPixelValue(_))
    ));
}

#[test]
fn test_bad_magic() {
    for data in [
        &b"P5 1 1 255\n\x00"[..],
        b"ppm 1 1 255\n0 0 0",
        b"",
        b"# only\n",
        b"# not magic\nP3 1 1 255 1 2 3",
        b"P3#x\n1 1 255 1 2 3",
        b"\n\n   P3 1 1 255 1 2 3"
    ] {
        let err = decode(data).unwrap_err();

        assert_eq!(err.kind(), PPMErrorKind::Format);
        assert!(matches!(err, PPMDecodeErrors::BadMagicNumber(_)));
    }
}

#[test]
fn test_missing_max_value() {
    assert!(matches!(
        decode(b"P3 1 1"),
        Err(PPMDecodeErrors::MissingMaxValue)
    ));
    assert!(matches!(
        decode(b"P3 1 1 0\n0 0 0"),
        Err(PPMDecodeErrors::MaxValueOutOfRange(0))
    ));
}
