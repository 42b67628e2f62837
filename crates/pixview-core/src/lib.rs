/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pixview crates
//!
//! It currently contains
//!
//! - A bounds checked byte reader with endian aware reads
//! - Bit depth information derived from a sample's maximum value
//! - Decoder options
//! - A logging shim that is silent unless the `log` feature is on
//!
//! # Features
//!  - `log`: Forward the logging macros to the [`log`](https://docs.rs/log) crate.
#![macro_use]

pub mod bit_depth;
pub mod bytestream;
pub mod log;
pub mod options;
