//! Parameter mapping plus its line-oriented text format

use indexmap::IndexMap;

pub mod parser;
pub mod writer;

pub use parser::{parse_into, read_key_value, split_assignment};
pub use writer::{render_params, write_params};

/// Ordered key/value parameters.
///
/// `IndexMap::insert` replaces the value of an existing key in place, so a
/// key overridden by a later source keeps the position of its first
/// assignment.
pub type Params = IndexMap<String, String>;
