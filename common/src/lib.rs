//! Shared layer for `dockmap`: the canonical topology models and the
//! resolved per-run configuration. Pure Rust, no IO, no external crates —
//! everything here is safe to use from any layer.

pub mod config;
pub mod models;
