/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use pixview_ppm::PPMHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header details of one input file, as printed by `--probe`
pub struct Metadata<'a> {
    file:   OsString,
    size:   u64,
    header: &'a PPMHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, header: &'a PPMHeader) -> Metadata<'a> {
        Metadata { file, size, header }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("metadata", &HeaderFields(self.header))?;

        state.end()
    }
}

struct HeaderFields<'a>(&'a PPMHeader);

impl<'a> Serialize for HeaderFields<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let header = self.0;
        let mut state = serializer.serialize_struct("PPMHeader", 5)?;

        state.serialize_field("format", &header.version.to_string())?;
        state.serialize_field("width", &header.width)?;
        state.serialize_field("height", &header.height)?;
        state.serialize_field("max_value", &header.max_value)?;
        state.serialize_field("bit_depth", &(header.bit_depth().size_of() * 8))?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use pixview_ppm::{PPMHeader, PPMVersion};

    use crate::serde::Metadata;

    #[test]
    fn serializes_header_fields() {
        let header = PPMHeader {
            version:   PPMVersion::P6,
            width:     3,
            height:    2,
            max_value: 1023
        };
        let metadata = Metadata::new(OsString::from("a.ppm"), 30, &header);

        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["file"], "a.ppm");
        assert_eq!(value["size"], 30);
        assert_eq!(value["metadata"]["format"], "P6");
        assert_eq!(value["metadata"]["width"], 3);
        assert_eq!(value["metadata"]["max_value"], 1023);
        assert_eq!(value["metadata"]["bit_depth"], 16);
    }
}
