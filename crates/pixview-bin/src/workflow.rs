/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use pixview_ppm::{decode_file, PPMEncoder, PPMVersion, RgbRaster};

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::WorkflowErrors;
use crate::jpeg_export::save_jpeg;
use crate::probe_files::probe_input_files;

/// Output formats picked from the output file extension
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    Ppm(PPMVersion),
    Jpeg
}

impl OutputFormat {
    /// Pick a format for `path`, `None` for unknown extensions
    pub fn from_path(path: &Path, ascii: bool) -> Option<OutputFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();

        match ext.as_str() {
            "ppm" | "pnm" if ascii => Some(OutputFormat::Ppm(PPMVersion::P3)),
            "ppm" | "pnm" => Some(OutputFormat::Ppm(PPMVersion::P6)),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None
        }
    }
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    let inputs = args
        .get_raw("in")
        .ok_or_else(|| "No input files given".to_string())?;

    if args.get_flag("probe") {
        info!("Probing input files");
        probe_input_files(inputs);
        return Ok(());
    }
    let outputs = args
        .get_raw("out")
        .ok_or_else(|| "No output files given, pass one with -o".to_string())?;

    if inputs.len() != outputs.len() {
        return Err(format!(
            "Got {} inputs but {} outputs, each input needs an output",
            inputs.len(),
            outputs.len()
        )
        .into());
    }

    info!("Creating workflows from input");

    for (in_file, out_file) in inputs.zip(outputs) {
        convert_file(in_file, out_file, cmd_opts)?;
    }
    Ok(())
}

/// Decode `in_file` and write it to `out_file` in the format its
/// extension asks for
pub(crate) fn convert_file(
    in_file: &OsStr, out_file: &OsStr, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    verify_file_paths(in_file, out_file)?;

    let out_path = Path::new(out_file);

    let format = OutputFormat::from_path(out_path, cmd_opts.ascii)
        .ok_or_else(|| format!("Unknown output format for {out_path:?}"))?;

    let raster = decode_file(in_file, get_decoder_options(cmd_opts))?;

    debug!("Decoded {:?}, dimensions {:?}", in_file, raster.dimensions());

    match format {
        OutputFormat::Ppm(version) => write_ppm(&raster, out_path, version)?,
        OutputFormat::Jpeg => {
            debug!("Treating {:?} as a jpg file", out_file);
            save_jpeg(&raster, out_path, cmd_opts.quality)?;
        }
    }
    info!("Wrote {:?}", out_file);

    Ok(())
}

fn write_ppm(raster: &RgbRaster, path: &Path, version: PPMVersion) -> Result<(), WorkflowErrors> {
    debug!("Treating {:?} as a {} ppm file", path, version);

    let mut writer = BufWriter::new(File::create(path)?);

    PPMEncoder::from_raster(raster)
        .set_version(version)
        .encode(&mut writer)?;

    writer.flush()?;

    Ok(())
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr) -> Result<(), WorkflowErrors> {
    let in_path = Path::new(p0);
    let out_path = Path::new(p1);

    if !in_path.exists() {
        return Err(format!("Path {:?}, does not exist", in_path).into());
    }
    if !in_path.is_file() {
        return Err(format!("Path {:?} is not a file", in_path).into());
    }
    // an output that does not exist yet cannot be canonicalized
    let same_file = match (fs::canonicalize(in_path), fs::canonicalize(out_path)) {
        (Ok(a), Ok(b)) => a == b,
        _ => p0 == p1
    };
    if same_file {
        return Err(format!("Cannot use {:?} as both input and output", p0).into());
    }
    Ok(())
}
