//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Segment collapsing
//! - Bounded truncation
//! - Settings resolution
//!
//! The UTF-8 scanning primitives are internal.

// Shortening primitives
pub use super::collapse::{collapse, collapse_bytes, collapse_with};
pub use super::truncate::truncate;

// Configuration
pub use super::config::{
    default_config_path, parse_separator, CliConfig, EnvConfig, FileConfig, Settings,
};
pub use super::config::{DEFAULT_TAIL, MIN_SHORTENABLE_LEN};
pub use super::config::{CLEAN_ENV, MAX_WIDTH_ENV, SEPARATOR_ENV, TAIL_ENV, TILDE_ENV};
