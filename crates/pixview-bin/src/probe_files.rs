/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs;

use log::warn;
use pixview_core::options::DecoderOptions;
use pixview_ppm::PPMDecoder;

use crate::errors::WorkflowErrors;
use crate::serde::Metadata;

/// Read the header of `in_file` and render it as pretty JSON
pub fn probe_file(in_file: &OsStr) -> Result<String, WorkflowErrors> {
    let data = fs::read(in_file)?;
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    decoder.decode_headers()?;

    let header = decoder
        .header()
        .ok_or_else(|| format!("No header found in {in_file:?}"))?;

    let metadata = Metadata::new(in_file.to_os_string(), data.len() as u64, &header);

    Ok(serde_json::to_string_pretty(&metadata)?)
}

/// Probe input files, extract metadata, and print to standard output.
///
/// Files that cannot be probed are reported and skipped.
pub fn probe_input_files<'a, I: Iterator<Item = &'a OsStr>>(inputs: I) {
    for in_file in inputs {
        match probe_file(in_file) {
            Ok(json) => println!("{json}"),
            Err(err) => warn!("Could not probe {:?}, reason {:?}", in_file, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::probe_files::probe_file;

    #[test]
    fn probes_header_only() {
        let path =
            std::env::temp_dir().join(format!("pixview-{}-probe.ppm", std::process::id()));
        // pixel data is missing, probing does not need it
        fs::write(&path, b"P3\n# probe\n4 2\n15\n").unwrap();

        let json = probe_file(path.as_os_str());
        fs::remove_file(&path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json.unwrap()).unwrap();
        assert_eq!(value["metadata"]["format"], "P3");
        assert_eq!(value["metadata"]["width"], 4);
        assert_eq!(value["metadata"]["height"], 2);
        assert_eq!(value["metadata"]["bit_depth"], 8);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path =
            std::env::temp_dir().join(format!("pixview-{}-nothing.ppm", std::process::id()));

        assert!(probe_file(path.as_os_str()).is_err());
    }
}
