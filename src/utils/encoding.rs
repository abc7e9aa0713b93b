//! Text decoding and re-encoding for parameter sources.
//!
//! Sources arrive as raw bytes (a file or stdin). Decoding strategy:
//! 1. Honor a UTF-8 / UTF-16 LE / UTF-16 BE byte order mark, and strip it
//! 2. Strict UTF-8 fast path for everything else
//! 3. Fall back to chardetng detection, keeping the guess only if it
//!    round-trips the bytes exactly
//! 4. Last resort: windows-1252, which maps every byte and round-trips
//!
//! The detected [`TextEncoding`] is carried to the writer so values come back
//! out as the same bytes they went in as.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

/// Encoding of a parameter source, including whether it started with a BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
    bom: bool,
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self { encoding: UTF_8, bom: false }
    }
}

impl TextEncoding {
    pub fn new(encoding: &'static Encoding, bom: bool) -> Self {
        Self { encoding, bom }
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn has_bom(&self) -> bool {
        self.bom
    }

    /// Encode `text` back to bytes, writing the BOM again if the source had one.
    ///
    /// Returns `None` when `text` holds characters this encoding cannot
    /// represent.
    pub fn encode(&self, text: &str) -> Option<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len() + 3);

        if self.encoding == UTF_16LE || self.encoding == UTF_16BE {
            // encoding_rs only encodes UTF-16 as UTF-8
            let big_endian = self.encoding == UTF_16BE;
            let units = self.bom.then_some('\u{feff}').into_iter().chain(text.chars());
            for unit in units.flat_map(|c| c.encode_utf16(&mut [0; 2]).to_vec()) {
                if big_endian {
                    out.extend_from_slice(&unit.to_be_bytes());
                } else {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
            return Some(out);
        }

        if self.bom && self.encoding == UTF_8 {
            out.extend_from_slice(&[0xef, 0xbb, 0xbf]);
        }
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return None;
        }
        out.extend_from_slice(&bytes);
        Some(out)
    }
}

/// Decode `bytes` to text, returning the text and the encoding used.
pub fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), TextEncoding::new(encoding, true));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), TextEncoding::default());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guessed = detector.guess(None, true);

    if let Some(text) = decode_exact(guessed, bytes) {
        tracing::debug!(encoding = guessed.name(), "input is not UTF-8, using detected encoding");
        return (text, TextEncoding::new(guessed, false));
    }

    tracing::debug!(
        guessed = guessed.name(),
        "detected encoding does not round-trip, falling back to windows-1252"
    );
    let (decoded, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (decoded.into_owned(), TextEncoding::new(WINDOWS_1252, false))
}

/// Decode with `encoding` only if encoding the result reproduces `bytes`.
fn decode_exact(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return None;
    }
    let (encoded, _, unmappable) = encoding.encode(&decoded);
    if unmappable || encoded.as_ref() != bytes {
        return None;
    }
    Some(decoded.into_owned())
}
