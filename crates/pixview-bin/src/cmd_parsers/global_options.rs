/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:   Option<usize>,
    pub max_height:  Option<usize>,
    pub strict_mode: bool,
    pub ascii:       bool,
    pub quality:     i64
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:   None,
            max_height:  None,
            strict_mode: false,
            ascii:       false,
            quality:     90
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.max_width = options.get_one::<usize>("max-width").copied();
    cmd_options.max_height = options.get_one::<usize>("max-height").copied();

    if let Some(quality) = options.get_one::<i64>("quality") {
        cmd_options.quality = *quality;
    }

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Enabling strict mode");
        cmd_options.strict_mode = options.get_flag("strict");
    }

    if options.value_source("ascii") == Some(ValueSource::CommandLine) {
        info!("Writing PPM files as ASCII");
        cmd_options.ascii = options.get_flag("ascii");
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn parses_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pixview", "-i", "in.ppm", "-o", "out.jpg", "--quality", "40", "--ascii",
                "--strict", "--max-width", "64"
            ])
            .unwrap();

        let options = parse_options(&matches);

        assert_eq!(options.quality, 40);
        assert!(options.ascii);
        assert!(options.strict_mode);
        assert_eq!(options.max_width, Some(64));
        assert_eq!(options.max_height, None);
    }
}
