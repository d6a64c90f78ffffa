pub(crate) mod fs;

// Public API - utilities used by commands
pub use fs::{abbreviate_home, clean_path};
