//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod heatmap;
pub mod price;
