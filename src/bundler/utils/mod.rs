//! Shared helpers for the platform bundlers.

pub mod fs;
