//! Command implementations for mesh-cli

pub mod label;
pub mod manifest;

pub use label::run_label;
pub use manifest::{run_manifest_get, run_manifest_show};
