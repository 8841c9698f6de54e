//! Linux packaging.

pub mod debian;
