/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixview")
        .about("Inspect PPM images and convert them to PPM or JPEG")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .long_help("Output to write the data to.\nOutputs are paired with inputs in the order given, the extension picks the format (ppm, pnm, jpg or jpeg)")
            .action(ArgAction::Append))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image headers as JSON and exit"))
        .arg(Arg::new("quality")
            .long("quality")
            .help_heading("ENCODING")
            .help("JPEG quality, from 0 to 100")
            .value_parser(value_parser!(i64))
            .default_value("90"))
        .arg(Arg::new("ascii")
            .long("ascii")
            .action(ArgAction::SetTrue)
            .help_heading("ENCODING")
            .help("Write PPM outputs as ASCII (P3) instead of binary (P6)"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject samples larger than the declared max value instead of clamping them"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn inputs_are_repeatable() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixview", "-i", "a.ppm", "-i", "b.ppm", "--probe"])
            .unwrap();

        let inputs = matches.get_raw("in").unwrap().collect::<Vec<_>>();
        assert_eq!(inputs, ["a.ppm", "b.ppm"]);
        assert_eq!(*matches.get_one::<i64>("quality").unwrap(), 90);
    }
}
