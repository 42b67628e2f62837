/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use pixview_ppm::{PPMDecodeErrors, PPMEncodeErrors};

use crate::jpeg_export::ExportErrors;

/// Errors that stop a command line workflow
pub enum WorkflowErrors {
    Decode(PPMDecodeErrors),
    Encode(PPMEncodeErrors),
    Export(ExportErrors),
    IoErrors(io::Error),
    Serialize(serde_json::Error),
    GenericString(String)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => writeln!(f, "Decoding failed: {err:?}"),
            Self::Encode(err) => writeln!(f, "Encoding failed: {err:?}"),
            Self::Export(err) => writeln!(f, "Exporting failed: {err:?}"),
            Self::IoErrors(err) => writeln!(f, "I/O error {err}"),
            Self::Serialize(err) => writeln!(f, "Could not serialize metadata: {err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for WorkflowErrors {}

impl From<PPMDecodeErrors> for WorkflowErrors {
    fn from(err: PPMDecodeErrors) -> Self {
        WorkflowErrors::Decode(err)
    }
}

impl From<PPMEncodeErrors> for WorkflowErrors {
    fn from(err: PPMEncodeErrors) -> Self {
        WorkflowErrors::Encode(err)
    }
}

impl From<ExportErrors> for WorkflowErrors {
    fn from(err: ExportErrors) -> Self {
        WorkflowErrors::Export(err)
    }
}

impl From<io::Error> for WorkflowErrors {
    fn from(err: io::Error) -> Self {
        WorkflowErrors::IoErrors(err)
    }
}

impl From<serde_json::Error> for WorkflowErrors {
    fn from(err: serde_json::Error) -> Self {
        WorkflowErrors::Serialize(err)
    }
}

impl From<String> for WorkflowErrors {
    fn from(err: String) -> Self {
        WorkflowErrors::GenericString(err)
    }
}
