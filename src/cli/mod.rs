//! Command-line interface for make-config
//!
//! Option letters follow the original tool: `-i` input, `-o` output,
//! `-t` template.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::merge::{self, MergeOptions};
use crate::stream::{Sink, Source};

const LONG_ABOUT: &str = "\
Create a configuration file from a template and key/value overrides.

Reads key/value pairs from stdin or a file. Pairs in the template and input \
are delimited by '=', and lines beginning with '#' are ignored. Pairs from the \
input replace any with the same key found in the template. The result is \
written to stdout or to the given file as 'key = value' lines.";

/// Merge key/value configuration files
#[derive(Parser, Debug)]
#[command(name = "make-config")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Input filename ("stdin" reads standard input)
    #[arg(short = 'i', value_name = "PATH", default_value = "stdin")]
    input: Source,

    /// Output filename ("stdout" writes standard output)
    #[arg(short = 'o', value_name = "PATH", default_value = "stdout")]
    output: Sink,

    /// Template filename; its values are overridden by the input
    #[arg(short = 't', value_name = "PATH")]
    template: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Extra positional arguments are accepted and ignored
    #[arg(value_name = "ARGS", hide = true)]
    extra: Vec<String>,
}

impl Cli {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            template: self.template.clone(),
        }
    }
}

/// Build the stderr log filter.
///
/// A set `RUST_LOG` is used as given, otherwise the level is WARN. `--verbose`
/// raises the global level to DEBUG on top of either.
fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into()));
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose))
        .try_init();

    if !cli.extra.is_empty() {
        tracing::warn!(args = ?cli.extra, "ignoring positional arguments");
    }

    merge::run(&cli.merge_options())?;
    Ok(())
}
