//! Canonical `key = value` output.

use super::Params;
use crate::utils::TextEncoding;
use std::io::{self, Write};

/// Render `params` as text, one `<key> = <value>` line per entry.
pub fn render_params(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params {
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Write `params` to `writer` in iteration order and flush it.
///
/// Text is encoded back to `encoding`. If a value cannot be represented
/// there (a template and input in different encodings), the output is
/// written as UTF-8 instead.
pub fn write_params<W: Write>(
    params: &Params,
    encoding: TextEncoding,
    mut writer: W,
) -> io::Result<()> {
    let text = render_params(params);
    let bytes = match encoding.encode(&text) {
        Some(bytes) => bytes,
        None => {
            tracing::warn!(
                encoding = encoding.name(),
                "parameters not representable in source encoding, writing UTF-8"
            );
            text.into_bytes()
        }
    };
    writer.write_all(&bytes)?;
    writer.flush()
}
