//! Shared test utilities for the mesh-helpers workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`manifest`]: manifest documents written to a temporary directory
//! - [`http`]: a one-shot HTTP server for remote manifest sources

pub mod http;
pub mod manifest;
