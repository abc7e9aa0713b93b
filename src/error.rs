//! Error types for the merge pipeline

use std::io;
use thiserror::Error;

/// A failure at one stage of the read-merge-write pipeline.
///
/// `location` is the file path as given on the command line, or `stdin` /
/// `stdout` for the standard streams.
#[derive(Debug, Error)]
pub enum MakeConfigError {
    #[error("cannot open template file {location}")]
    OpenTemplate {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot open input file {location}")]
    OpenInput {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("failed reading {location}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot open output file {location}")]
    CreateOutput {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("failed writing {location}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MakeConfigError>;
