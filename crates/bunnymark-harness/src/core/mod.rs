//! Core harness-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform
//! loop) and higher layers (the benchmark session, the CLI). It avoids leaking
//! runtime internals into user code and provides a consistent per-frame
//! context.

mod app;
mod ctx;

pub use app::{AppControl, HarnessApp};
pub use ctx::{FrameCtx, WindowCtx};
