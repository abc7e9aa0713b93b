//! make-config: merge key/value configuration files
//!
//! Reads `key = value` lines from an optional template and an input (file or
//! stdin), lets input values override template values, and writes the merged
//! parameters back out in canonical `key = value` form.

pub mod cli;
pub mod error;
pub mod merge;
pub mod params;
pub mod stream;
pub mod utils;

pub use error::MakeConfigError;
pub use merge::{merge_sources, MergeOptions};
pub use params::Params;
pub use stream::{Sink, Source};
