//! Key/value line parsing.

use super::Params;
use crate::utils::{decode_text, TextEncoding};
use std::io::{self, Read};

/// Split one line into a trimmed `(key, value)` pair.
///
/// Returns `None` for comment lines (first character `#`) and for lines that
/// are empty or whitespace only. The split happens at the first `=`, so the
/// value may itself contain `=`. A line without `=` yields an empty value.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.trim().is_empty() {
        return None;
    }

    let (key, value) = match line.find('=') {
        Some(idx) => (&line[..idx], &line[idx + 1..]),
        None => (line, ""),
    };

    Some((key.trim(), value.trim()))
}

/// Split `text` into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A `\r\n` pair yields an extra empty piece, which parsing skips as blank.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
}

/// Apply every assignment in `text` to `params`, in line order.
///
/// Returns the number of assignments applied.
pub fn parse_into(params: &mut Params, text: &str) -> usize {
    let mut applied = 0;
    for (key, value) in split_lines(text).filter_map(split_assignment) {
        if let Some(previous) = params.insert(key.to_string(), value.to_string()) {
            tracing::debug!(key, previous = %previous, value, "overriding parameter");
        }
        applied += 1;
    }
    applied
}

/// Read all of `reader` and fold its assignments into `params`.
///
/// Also returns the encoding the source was decoded with, so the merged
/// parameters can be written back out as the same bytes.
pub fn read_key_value<R: Read>(
    mut params: Params,
    mut reader: R,
) -> io::Result<(Params, TextEncoding)> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let (text, encoding) = decode_text(&bytes);
    tracing::trace!(
        encoding = encoding.name(),
        bytes = bytes.len(),
        "decoded parameter source"
    );

    let applied = parse_into(&mut params, &text);
    tracing::debug!(applied, total = params.len(), "parsed parameters");
    Ok((params, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Params {
        let mut params = Params::new();
        parse_into(&mut params, text);
        params
    }

    #[test]
    fn test_split_on_first_equals_only() {
        assert_eq!(split_assignment("KEY=a=b=c"), Some(("KEY", "a=b=c")));
    }

    #[test]
    fn test_split_trims_key_and_value() {
        assert_eq!(split_assignment("  name   =  some value \t"), Some(("name", "some value")));
    }

    #[test]
    fn test_line_without_equals_has_empty_value() {
        assert_eq!(split_assignment("justtext"), Some(("justtext", "")));
        assert_eq!(split_assignment("  padded text  "), Some(("padded text", "")));
    }

    #[test]
    fn test_empty_key_and_value_are_kept() {
        assert_eq!(split_assignment("="), Some(("", "")));
        assert_eq!(split_assignment(" = v"), Some(("", "v")));
    }

    #[test]
    fn test_comment_and_blank_lines_are_skipped() {
        assert_eq!(split_assignment("# comment"), None);
        assert_eq!(split_assignment("#KEY=1"), None);
        assert_eq!(split_assignment(""), None);
        assert_eq!(split_assignment("   \t "), None);
    }

    #[test]
    fn test_indented_hash_is_not_a_comment() {
        assert_eq!(split_assignment("  # note = x"), Some(("# note", "x")));
    }

    #[test]
    fn test_parse_ignores_comments_and_blanks() {
        let params = parse("# header\n\nA = 1\n   \n# B = 2\nC=3\n");
        let entries: Vec<_> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("A", "1"), ("C", "3")]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_and_last_value() {
        let params = parse("A = 1\nB = 2\nA = 3\n");
        let entries: Vec<_> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let params = parse("A = 1\r\nB = 2\r\n");
        assert_eq!(params.get("A").map(String::as_str), Some("1"));
        assert_eq!(params.get("B").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_lone_carriage_return_separates_lines() {
        let params = parse("A = 1\rB = 2\r# note\rC = 3\r");
        let entries: Vec<_> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("A", "1"), ("B", "2"), ("C", "3")]);
    }

    #[test]
    fn test_parse_into_counts_assignments() {
        let mut params = Params::new();
        let applied = parse_into(&mut params, "A=1\n#c\nA=2\nB\n");
        assert_eq!(applied, 3);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_read_key_value_merges_into_existing() {
        let mut base = Params::new();
        base.insert("A".to_string(), "1".to_string());
        base.insert("B".to_string(), "2".to_string());

        let (merged, _) = read_key_value(base, "B = 3\nC = 4\n".as_bytes()).expect("read");
        let entries: Vec<_> = merged.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("A", "1"), ("B", "3"), ("C", "4")]);
    }

    #[test]
    fn test_read_key_value_strips_utf8_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"KEY = value\n");

        let (params, encoding) = read_key_value(Params::new(), bytes.as_slice()).expect("read");
        assert_eq!(params.get("KEY").map(String::as_str), Some("value"));
        assert!(encoding.has_bom());
    }
}
