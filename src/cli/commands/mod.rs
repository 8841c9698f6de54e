//! Command execution for bundler operations.

pub mod build;
