/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lazy tokenizer shared by the header and P3 readers
use pixview_core::bytestream::ZByteReader;

/// Netpbm whitespace, `is_ascii_whitespace` plus vertical tab
#[inline(always)]
pub(crate) const fn is_pnm_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Whether `byte` ends a token
#[inline(always)]
const fn is_delimiter(byte: u8) -> bool {
    byte == b'#' || is_pnm_whitespace(byte)
}

/// An iterator over whitespace separated tokens with comments removed
///
/// A comment starts at a `#` and runs to the end of its line. Tokens
/// borrow from the input, nothing is copied.
///
/// After a token is returned, the underlying stream is positioned at
/// the byte directly following it.
pub(crate) struct Tokens<'a> {
    stream: ZByteReader<'a>
}

impl<'a> Tokens<'a> {
    pub fn new(data: &'a [u8]) -> Tokens<'a> {
        Tokens {
            stream: ZByteReader::new(data)
        }
    }

    /// Access the stream to read raw bytes after the header
    pub fn stream_mut(&mut self) -> &mut ZByteReader<'a> {
        &mut self.stream
    }

    /// Return the bytes up to the next whitespace
    ///
    /// Unlike [`Iterator::next`] nothing is skipped first, so leading
    /// whitespace yields an empty slice and a `#` is kept as content.
    pub fn next_raw(&mut self) -> &'a [u8] {
        self.stream.take_while(|x| !is_pnm_whitespace(x))
    }

    /// Skip the remainder of a comment, including its newline
    fn skip_comment(&mut self) {
        self.stream.take_while(|x| x != b'\n' && x != b'\r');
        // \r\n line endings end the comment too
        if self.stream.peek_u8() == Some(b'\r') {
            self.stream.skip(1);
        }
        if self.stream.peek_u8() == Some(b'\n') {
            self.stream.skip(1);
        }
    }

    /// Skip all whitespace characters and comments
    /// until one hits a character that isn't a space or
    /// we reach eof
    fn skip_spaces(&mut self) {
        loop {
            self.stream.take_while(is_pnm_whitespace);

            if self.stream.peek_u8() == Some(b'#') {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    /// Consume the single whitespace byte that terminates a header
    ///
    /// If a comment directly follows the last header token, the comment
    /// and its newline stand in for that byte. Nothing after the
    /// terminator is touched.
    pub fn skip_header_terminator(&mut self) {
        match self.stream.peek_u8() {
            Some(b'#') => self.skip_comment(),
            Some(byte) if is_pnm_whitespace(byte) => self.stream.skip(1),
            _ => ()
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_spaces();

        if self.stream.eof() {
            return None;
        }
        Some(self.stream.take_while(|x| !is_delimiter(x)))
    }
}
