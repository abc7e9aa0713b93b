//! Utility functions

pub mod encoding;

pub use encoding::{decode_text, TextEncoding};
