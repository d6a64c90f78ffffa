//! Truncate command implementation

use anyhow::Result;

use crate::core::truncate;

/// Prints `text` capped at `width` code points, ending in `tail` when cut
pub fn handle_truncate_command(text: &str, tail: &str, width: usize) -> Result<()> {
    let output = truncate(text, tail, width);
    tracing::debug!(width, truncated = output != text, "truncated text");
    println!("{output}");
    Ok(())
}
