//! CLI command implementations.

pub mod batch;
pub mod output;
pub mod process;
