//! Common test utilities and helpers
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so failures reproduce; each test owns its own
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random valid code point that is not `separator`
pub fn random_char(rng: &mut StdRng, separator: char) -> char {
    loop {
        let c: char = rng.gen();
        if c != separator {
            return c;
        }
    }
}

/// One path segment: `unicode` random code points followed by `ascii` printable ASCII characters
pub fn random_segment(rng: &mut StdRng, unicode: usize, ascii: usize, separator: char) -> String {
    let mut segment = String::with_capacity(unicode * 4 + ascii);
    for _ in 0..unicode {
        segment.push(random_char(rng, separator));
    }
    let mut pushed = 0;
    while pushed < ascii {
        let c = char::from(rng.gen_range(b'!'..=b'~'));
        if c != separator {
            segment.push(c);
            pushed += 1;
        }
    }
    segment
}

/// A random path of `segments` segments, rooted half of the time
pub fn random_path(rng: &mut StdRng, segments: usize, separator: char) -> String {
    let mut path = String::new();
    if rng.gen_bool(0.5) {
        path.push(separator);
    }
    for i in 0..segments {
        if i > 0 {
            path.push(separator);
        }
        let unicode = rng.gen_range(1..=3);
        let ascii = rng.gen_range(0..=12);
        path.push_str(&random_segment(rng, unicode, ascii, separator));
    }
    path
}

/// Random bytes of a random length in `1..=max_len`, biased towards UTF-8 edge cases
pub fn random_bytes(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    const INTERESTING: &[u8] = &[
        b'/', b'/', b'\\', b'.', b'a', 0x80, 0xBF, 0xC0, 0xC2, 0xDF, 0xE0, 0xED, 0xEF, 0xF0,
        0xF4, 0xF5, 0xFF,
    ];
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.5) {
                INTERESTING[rng.gen_range(0..INTERESTING.len())]
            } else {
                rng.gen()
            }
        })
        .collect()
}

/// Text after the last `separator`, or all of it
pub fn final_segment(path: &str, separator: char) -> &str {
    path.rsplit(separator).next().unwrap_or(path)
}
