/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader.
//!
//! The reader never reads out of bounds, reads that cannot be
//! satisfied return an error and leave the cursor in place.

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte stream reader
///
/// The lifetime parameter is from the stream which we read from,
/// slices handed out by the reader borrow from that stream and not
/// from the reader.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end leaves the reader at eof.
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }
    /// Number of bytes left in the stream
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    pub const fn get_position(&self) -> usize {
        self.position
    }
    /// Return the next byte without advancing, or `None` at eof
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }
    /// Return the next `num` bytes and advance past them
    ///
    /// The returned slice borrows from the underlying stream.
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        let end = self.position.checked_add(num).ok_or(ERROR_MSG)?;

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(ERROR_MSG)
        }
    }
    /// Advance while `func` returns true for the current byte
    ///
    /// Returns the bytes that were skipped.
    pub fn take_while<F: Fn(u8) -> bool>(&mut self, func: F) -> &'a [u8] {
        let start = self.position;

        while let Some(&byte) = self.stream.get(self.position) {
            if !func(byte) {
                break;
            }
            self.position += 1;
        }
        &self.stream[start..self.position]
    }
    /// Read a big endian u16, erroring out if fewer than two bytes remain
    ///
    /// A failed read does not move the cursor.
    #[inline]
    pub fn get_u16_be_err(&mut self) -> Result<u16, &'static str> {
        self.get_as_ref(2).map(|x| u16::from_be_bytes([x[0], x[1]]))
    }
}
