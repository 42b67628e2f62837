/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth, information and manipulations

/// The bit depth of a stored sample.
///
/// Netpbm formats store samples in one byte when the declared
/// maximum value fits in a byte and in two bytes otherwise.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitDepth {
    /// Samples occupy one byte, values 0-255
    Eight,
    /// Samples occupy two bytes, values 0-65535
    Sixteen
}

impl BitDepth {
    /// Return the bit depth needed to store samples whose
    /// largest value is `max_value`
    ///
    /// # Example
    /// ```
    /// use pixview_core::bit_depth::BitDepth;
    ///
    /// assert_eq!(BitDepth::from_max_value(255), BitDepth::Eight);
    /// assert_eq!(BitDepth::from_max_value(256), BitDepth::Sixteen);
    /// ```
    pub const fn from_max_value(max_value: u16) -> BitDepth {
        if max_value > 255 {
            BitDepth::Sixteen
        } else {
            BitDepth::Eight
        }
    }

    /// Size of a single sample in bytes
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => core::mem::size_of::<u8>(),
            Self::Sixteen => core::mem::size_of::<u16>()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bit_depth::BitDepth;

    #[test]
    fn depth_follows_max_value() {
        assert_eq!(BitDepth::from_max_value(1), BitDepth::Eight);
        assert_eq!(BitDepth::from_max_value(255), BitDepth::Eight);
        assert_eq!(BitDepth::from_max_value(256), BitDepth::Sixteen);
        assert_eq!(BitDepth::from_max_value(u16::MAX), BitDepth::Sixteen);
    }

    #[test]
    fn sizes() {
        assert_eq!(BitDepth::Eight.size_of(), 1);
        assert_eq!(BitDepth::Sixteen.size_of(), 2);
    }
}
