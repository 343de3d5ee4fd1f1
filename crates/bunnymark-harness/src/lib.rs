//! Bunnymark harness crate.
//!
//! This crate owns the benchmark core: the versioned-engine loader, the
//! compatibility shim, the renderer bootstrap, and the scene lifecycle that
//! lets workloads be swapped without leaking renderer state. Per-workload
//! drawing code lives under `scene::workloads`; the `bunnymark` binary is
//! thin wiring on top.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod version;
pub mod prefs;
pub mod loader;
pub mod shim;
pub mod engine;
pub mod assets;
pub mod probe;
pub mod scene;
pub mod bootstrap;

pub mod logging;
