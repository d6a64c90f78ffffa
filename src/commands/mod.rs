//! Command handlers for the `vain` binary

pub mod shorten;
pub mod truncate;
