//! Template + input merge pipeline
//!
//! Stages run strictly in order: parse template (if any), parse input, open
//! output, write. The output sink is only opened once both sources parsed,
//! so a failed read never leaves a truncated output file behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{MakeConfigError, Result};
use crate::params::{read_key_value, write_params, Params};
use crate::stream::{Sink, Source};
use crate::utils::TextEncoding;

/// Resolved settings for one run.
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    pub input: Source,
    pub output: Sink,
    pub template: Option<PathBuf>,
}

/// Parse the template (if given) and then the input into one mapping.
///
/// Input values replace template values for the same key; the key keeps its
/// template position. The returned encoding is the input's, or the template's
/// when the input is plain UTF-8 (which covers pure ASCII and empty input).
pub fn merge_sources(
    template: Option<&Path>,
    input: &Source,
) -> Result<(Params, TextEncoding)> {
    let mut params = Params::new();
    let mut encoding = TextEncoding::default();

    if let Some(path) = template {
        let location = path.display().to_string();
        let file = File::open(path).map_err(|source| MakeConfigError::OpenTemplate {
            location: location.clone(),
            source,
        })?;
        (params, encoding) = read_key_value(params, file)
            .map_err(|source| MakeConfigError::Read { location: location.clone(), source })?;
        tracing::info!(template = %location, count = params.len(), "loaded template");
    }

    let location = input.to_string();
    let reader = input.open().map_err(|source| MakeConfigError::OpenInput {
        location: location.clone(),
        source,
    })?;
    let (params, input_encoding) = read_key_value(params, reader)
        .map_err(|source| MakeConfigError::Read { location: location.clone(), source })?;
    tracing::info!(input = %location, count = params.len(), "merged input");

    if input_encoding != TextEncoding::default() {
        encoding = input_encoding;
    }
    Ok((params, encoding))
}

/// Run the whole pipeline: merge sources, then write to the configured sink.
pub fn run(options: &MergeOptions) -> Result<Params> {
    let (params, encoding) = merge_sources(options.template.as_deref(), &options.input)?;

    let location = options.output.to_string();
    let writer = options.output.create().map_err(|source| MakeConfigError::CreateOutput {
        location: location.clone(),
        source,
    })?;
    write_params(&params, encoding, writer)
        .map_err(|source| MakeConfigError::Write { location: location.clone(), source })?;
    tracing::debug!(output = %location, lines = params.len(), "wrote parameters");

    Ok(params)
}
