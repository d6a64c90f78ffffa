//! UTF-8 decoding primitives shared by the collapser and the truncator
//!
//! This is the only place that knows about leading-byte widths. Everything
//! else asks for a code point and its width, or just the width.
//!
//! Malformed input is never an error here: a byte that does not start a
//! complete, valid sequence counts as a one-byte unit. Since continuation
//! bytes are always `0b10xx_xxxx`, a width never spans an ASCII byte, so a
//! scan for an ASCII separator can't jump over one.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Width implied by a leading byte, or 0 for continuation and never-valid bytes
#[inline]
const fn lead_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of bytes the unit starting at `bytes[0]` occupies.
///
/// Only the leading byte and the shape of the continuation bytes are looked
/// at. Returns 0 for empty input and a value in `1..=bytes.len()` otherwise.
#[inline]
pub(crate) fn skip_width(bytes: &[u8]) -> usize {
    let Some(&lead) = bytes.first() else {
        return 0;
    };
    let width = lead_width(lead);
    if width <= 1 {
        return 1;
    }
    match bytes.get(1..width) {
        Some(rest) if rest.iter().all(|&b| is_continuation(b)) => width,
        _ => 1,
    }
}

/// Decodes the code point at `bytes[0]`.
///
/// Returns `None` with a width of 1 for malformed sequences (overlong forms
/// and surrogates included), and `(None, 0)` for empty input.
#[inline]
pub(crate) fn decode(bytes: &[u8]) -> (Option<char>, usize) {
    let width = skip_width(bytes);
    if width == 0 {
        return (None, 0);
    }
    let decoded = bytes
        .get(..width)
        .and_then(|unit| std::str::from_utf8(unit).ok())
        .and_then(|unit| unit.chars().next());
    match decoded {
        Some(c) => (Some(c), width),
        None => (None, 1),
    }
}

/// Walks at most `count` units forward from byte offset `from`.
///
/// Returns the byte offset reached and how many units were actually
/// consumed, which is less than `count` when the input runs out.
pub(crate) fn advance(bytes: &[u8], from: usize, count: usize) -> (usize, usize) {
    let mut pos = from;
    let mut taken = 0;
    while taken < count {
        let width = match bytes.get(pos..) {
            Some(rest) => skip_width(rest),
            None => 0,
        };
        if width == 0 {
            break;
        }
        pos += width;
        taken += 1;
    }
    (pos, taken)
}

/// Code-point length of `bytes`, counting malformed bytes as one unit each
pub(crate) fn code_point_len(bytes: &[u8]) -> usize {
    advance(bytes, 0, usize::MAX).1
}

/// Letter classification used to decide whether a segment keeps one or two code points.
///
/// A letter is any code point in general category L (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`).
/// Letter numerals like `ⅻ` and combining marks are not letters.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
