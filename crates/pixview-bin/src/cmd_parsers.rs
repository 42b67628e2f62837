/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixview_core::options::DecoderOptions;

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;

/// Decoder options for images named on the command line
///
/// Starts from the relaxed command line limits, user supplied
/// limits replace them.
pub fn get_decoder_options(cmd_opts: &CmdOptions) -> DecoderOptions {
    let mut options = DecoderOptions::new_cmd().set_strict_mode(cmd_opts.strict_mode);

    if let Some(width) = cmd_opts.max_width {
        options = options.set_max_width(width);
    }
    if let Some(height) = cmd_opts.max_height {
        options = options.set_max_height(height);
    }
    options
}

#[cfg(test)]
mod tests {
    use pixview_core::options::DecoderOptions;

    use crate::cmd_parsers::get_decoder_options;
    use crate::cmd_parsers::global_options::CmdOptions;

    #[test]
    fn limits_default_to_cmd_options() {
        let options = get_decoder_options(&CmdOptions::new());
        let cmd = DecoderOptions::new_cmd();

        assert_eq!(options.get_max_width(), cmd.get_max_width());
        assert_eq!(options.get_max_height(), cmd.get_max_height());
        assert!(!options.get_strict_mode());
    }

    #[test]
    fn user_limits_win() {
        let mut cmd_opts = CmdOptions::new();
        cmd_opts.max_width = Some(10);
        cmd_opts.strict_mode = true;

        let options = get_decoder_options(&cmd_opts);

        assert_eq!(options.get_max_width(), 10);
        assert_eq!(options.get_max_height(), DecoderOptions::new_cmd().get_max_height());
        assert!(options.get_strict_mode());
    }
}
