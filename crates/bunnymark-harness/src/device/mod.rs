//! GPU device + surface management.
//!
//! The harness, not the engine, creates the rendering context, so every
//! engine build renders against a context with exactly the capabilities the
//! benchmark was specified with. This module owns:
//! - the wgpu Instance/Adapter/Device/Queue
//! - the Surface (swapchain) and its configuration
//! - frame acquisition and command submission

mod gpu;
mod init;

pub use gpu::{Gpu, GpuFrame};
pub use init::ContextOptions;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
