//! Segment collapsing for vanity path display
//!
//! Every segment except the last is reduced to its first letter, or to its
//! first two code points when the first one is not a letter (`.config`
//! becomes `.c`). The root marker and the final segment are kept verbatim.
//! The input is expected to be already cleaned; see [`crate::utils::clean_path`].

use std::borrow::Cow;

use super::config::MIN_SHORTENABLE_LEN;
use super::utf8::{decode, is_letter, skip_width};

/// Most bytes one collapsed segment can take: two 4-byte code points plus the separator
const MAX_COLLAPSED_SEGMENT_LEN: usize = 9;

/// Collapses `path` using the platform's main separator
pub fn collapse(path: &str) -> Cow<'_, str> {
    collapse_with(path, std::path::MAIN_SEPARATOR as u8)
}

/// Collapses `path` using `separator`.
///
/// Paths that cannot be shortened, and any non-ASCII `separator`, are
/// returned borrowed and unchanged.
pub fn collapse_with(path: &str, separator: u8) -> Cow<'_, str> {
    match collapse_bytes(path.as_bytes(), separator) {
        Cow::Borrowed(_) => Cow::Borrowed(path),
        // Cuts only ever land on code point boundaries of valid input
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(collapsed) => Cow::Owned(collapsed),
            Err(_) => Cow::Borrowed(path),
        },
    }
}

/// Byte-level collapse that tolerates malformed UTF-8.
///
/// Invalid bytes are treated as one-byte non-letter units, so a segment
/// starting with garbage keeps two units. The scan never reads past the
/// input and always terminates.
pub fn collapse_bytes(path: &[u8], separator: u8) -> Cow<'_, [u8]> {
    if !separator.is_ascii() || path.len() < MIN_SHORTENABLE_LEN {
        return Cow::Borrowed(path);
    }
    // Zero or one collapsible segment when the last separator sits at index 0 or 1
    let last = match path.iter().rposition(|&b| b == separator) {
        Some(index) if index >= 2 => index,
        _ => return Cow::Borrowed(path),
    };

    let (mut prefix, name) = path.split_at(last + 1);
    let separators = prefix.iter().filter(|&&b| b == separator).count();
    let mut out = Vec::with_capacity(1 + separators * MAX_COLLAPSED_SEGMENT_LEN + name.len());

    if prefix.first() == Some(&separator) {
        out.push(separator);
        prefix = &prefix[1..];
    }

    // Invariant: `prefix` is empty or ends with a separator
    while !prefix.is_empty() {
        let keep = head_len(prefix, separator);
        let Some(end) = find_separator(&prefix[keep..], separator).map(|offset| keep + offset) else {
            out.extend_from_slice(prefix);
            break;
        };
        out.extend_from_slice(&prefix[..keep]);
        out.push(separator);
        prefix = &prefix[end + 1..];
    }

    out.extend_from_slice(name);
    Cow::Owned(out)
}

/// Byte length of the part of the leading segment that survives collapsing
fn head_len(segment: &[u8], separator: u8) -> usize {
    match segment.first() {
        None => return 0,
        Some(&byte) if byte == separator => return 0,
        Some(_) => {}
    }
    let (first, width) = decode(segment);
    if segment.get(width) == Some(&separator) || first.is_some_and(is_letter) {
        return width;
    }
    width + decode(&segment[width..]).1
}

/// Offset of the first separator, skipping whole code points at a time
fn find_separator(bytes: &[u8], separator: u8) -> Option<usize> {
    let mut pos = 0;
    while let Some(&byte) = bytes.get(pos) {
        if byte == separator {
            return Some(pos);
        }
        pos += skip_width(&bytes[pos..]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix(path: &str) -> String {
        collapse_with(path, b'/').into_owned()
    }

    #[test]
    fn test_absolute_path() {
        assert_eq!(unix("/home/username/documents/project"), "/h/u/d/project");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(unix("relative/path/file.txt"), "r/p/file.txt");
        assert_eq!(unix("ab/cdef"), "a/cdef");
    }

    #[test]
    fn test_single_collapsible_segment_unchanged() {
        assert_eq!(unix("/a/b"), "/a/b");
        assert_eq!(unix("a/bcdef"), "a/bcdef");
    }

    #[test]
    fn test_short_and_separator_free_paths_are_borrowed() {
        for path in ["", "/", "a", "abc", "/ab", "name.txt", "/usr"] {
            assert!(matches!(collapse_with(path, b'/'), Cow::Borrowed(_)), "{path}");
        }
    }

    #[test]
    fn test_leading_punctuation_keeps_two() {
        assert_eq!(unix("/.hidden/sub/target"), "/.h/s/target");
        assert_eq!(unix("~/_build/.c/x"), "~/_b/.c/x");
        assert_eq!(unix("/1password/2fa/x"), "/1p/2f/x");
    }

    #[test]
    fn test_one_code_point_segments_kept() {
        assert_eq!(unix("/./a/b"), "/./a/b");
        assert_eq!(unix("~/projects/vainpath/src"), "~/p/v/src");
    }

    #[test]
    fn test_multibyte_segments() {
        assert_eq!(unix("/домой/документы/файл"), "/д/д/файл");
        assert_eq!(unix("/日本語/フォルダ/終"), "/日/フ/終");
        assert_eq!(unix("/😀smile/é/x"), "/😀s/é/x");
        assert_eq!(unix("/.ñandu/x/y"), "/.ñ/x/y");
    }

    #[test]
    fn test_letter_numerals_and_marks_keep_two() {
        assert_eq!(unix("/\u{217B}abc/\u{0345}def/x"), "/\u{217B}a/\u{0345}d/x");
        assert_eq!(unix("/\u{2160}\u{2161}/e\u{0301}t\u{0301}/x"), "/\u{2160}\u{2161}/e/x");
    }

    #[test]
    fn test_final_segment_untouched() {
        assert_eq!(unix("/var/log/nginx/.access log"), "/v/l/n/.access log");
        assert_eq!(unix("usr/local/"), "u/l/");
    }

    #[test]
    fn test_windows_separator() {
        assert_eq!(collapse_with(r"\Users\someone\Desktop", b'\\'), r"\U\s\Desktop");
        // Forward slashes are ordinary bytes under a backslash separator
        assert_eq!(collapse_with(r"\a/b\c/d\e", b'\\'), r"\a\c\e");
    }

    #[test]
    fn test_non_ascii_separator_is_ignored() {
        assert_eq!(collapse_with("/a/bb/cc", 0xC3), "/a/bb/cc");
    }

    #[test]
    fn test_malformed_bytes_best_effort() {
        // Lone continuation bytes count as one non-letter unit each
        let out = collapse_bytes(b"/\x80\x80\x80abc/def/ghi", b'/');
        assert_eq!(&*out, b"/\x80\x80/d/ghi");

        // Truncated sequence right before a separator
        let out = collapse_bytes(b"/ab\xE2/\xE2/x", b'/');
        assert_eq!(&*out, b"/a/\xE2/x");
    }

    #[test]
    fn test_empty_segments_survive() {
        assert_eq!(unix("a//bcd/e"), "a//b/e");
    }
}
