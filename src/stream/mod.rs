//! Input sources and output sinks
//!
//! The command line names them with a path, or with the `stdin` / `stdout`
//! sentinels for the standard streams.

use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

pub const STDIN_SENTINEL: &str = "stdin";
pub const STDOUT_SENTINEL: &str = "stdout";

/// Where input parameters are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == STDIN_SENTINEL {
            Ok(Source::Stdin)
        } else {
            Ok(Source::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str(STDIN_SENTINEL),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where the merged parameters are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Sink {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Sink {
    /// Open the sink for writing, truncating an existing file.
    pub fn create(&self) -> io::Result<Box<dyn Write>> {
        match self {
            Sink::Stdout => Ok(Box::new(io::stdout().lock())),
            Sink::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        }
    }
}

impl FromStr for Sink {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == STDOUT_SENTINEL {
            Ok(Sink::Stdout)
        } else {
            Ok(Sink::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str(STDOUT_SENTINEL),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}
