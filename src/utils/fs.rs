//! Path utilities applied before collapsing
//!
//! Both helpers are purely lexical: they never touch the file system.

use std::borrow::Cow;

/// Lexically cleans a path.
///
/// - repeated separators become one
/// - `.` segments are dropped
/// - `..` removes the segment before it; at the root it is dropped, and at
///   the start of a relative path it is kept
/// - a trailing separator is removed, except for the root itself
/// - an empty result becomes `.`
pub fn clean_path(path: &str, separator: char) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with(separator);

    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(separator) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut buf = [0u8; 4];
    let joined = parts.join(&*separator.encode_utf8(&mut buf));
    match (rooted, joined.is_empty()) {
        (true, _) => format!("{separator}{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Replaces a leading `home` directory with `~`.
///
/// Only whole segments match: with a home of `/home/al`, the path
/// `/home/alice` is left alone. A root or empty `home` never matches.
pub fn abbreviate_home<'a>(path: &'a str, home: &str, separator: char) -> Cow<'a, str> {
    let home = home.trim_end_matches(separator);
    if home.is_empty() {
        return Cow::Borrowed(path);
    }
    match path.strip_prefix(home) {
        Some("") => Cow::Borrowed("~"),
        Some(rest) if rest.starts_with(separator) => Cow::Owned(format!("~{rest}")),
        _ => Cow::Borrowed(path),
    }
}
