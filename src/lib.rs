//! Gem Cascade (workspace facade crate).
//!
//! Re-exports the rules engine as `gem_cascade::{core, engine, types}` while the
//! implementation lives in dedicated crates under `crates/`, and hosts the
//! configuration of the headless `gem-cascade` runner.

pub mod config;

pub use gem_cascade_core as core;
pub use gem_cascade_engine as engine;
pub use gem_cascade_types as types;
