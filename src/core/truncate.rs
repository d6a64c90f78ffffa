//! Code-point bounded truncation with a tail marker

use std::borrow::Cow;

use super::utf8::{advance, code_point_len};

/// Caps `text` at `max` code points, replacing the overflow with `tail`.
///
/// - `text` with at most `max` code points is returned as is.
/// - When `tail` alone is at least `max` code points long it takes the whole
///   budget, and only its last `max` code points are returned. With `max == 0`
///   that is the empty string.
/// - Otherwise the result is the first `max - len(tail)` code points of
///   `text` followed by `tail`.
///
/// ```
/// use vainpath::core::truncate;
///
/// assert_eq!(truncate("hello world", "...", 8), "hello...");
/// assert_eq!(truncate("hi", "...", 8), "hi");
/// ```
pub fn truncate<'a>(text: &'a str, tail: &'a str, max: usize) -> Cow<'a, str> {
    let bytes = text.as_bytes();
    let tail_len = code_point_len(tail.as_bytes());

    let (boundary, _) = advance(bytes, 0, max.saturating_sub(tail_len));
    let (end, _) = advance(bytes, boundary, max.min(tail_len));
    if end >= bytes.len() {
        return Cow::Borrowed(text);
    }

    if tail_len >= max {
        let (start, _) = advance(tail.as_bytes(), 0, tail_len - max);
        return match tail.get(start..) {
            Some(kept) => Cow::Borrowed(kept),
            None => Cow::Borrowed(text),
        };
    }

    let Some(head) = text.get(..boundary) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(head.len() + tail.len());
    out.push_str(head);
    out.push_str(tail);
    Cow::Owned(out)
}
