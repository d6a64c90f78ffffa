//! # vainpath
//!
//! `vainpath` shortens filesystem paths for display, the way fish's
//! `prompt_pwd` does. It powers the `vain` CLI.
//!
//! The results are for vanity only and will usually not name a real file.
//!
//! ## Core Features
//!
//! - **Segment collapsing**: every directory but the last shrinks to its first
//!   letter, or to two characters when it starts with punctuation (`.config` → `.c`).
//! - **Bounded truncation**: caps any string at N characters with a tail marker.
//! - **Byte-level scanning**: works on raw UTF-8 without decoding whole segments,
//!   and never panics on malformed input.
//!
//! ## Example
//!
//! ```rust
//! use vainpath::core::{collapse_with, truncate};
//!
//! assert_eq!(collapse_with("/home/username/documents/project", b'/'), "/h/u/d/project");
//! assert_eq!(collapse_with("/.hidden/sub/target", b'/'), "/.h/s/target");
//! assert_eq!(truncate("hello world", "...", 8), "hello...");
//! ```

pub mod commands;
pub mod core;
pub mod utils;
