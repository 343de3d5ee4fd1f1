//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame
//! to obtain a `FrameTime` snapshot. Delta clamping is expressed as an FPS
//! governor so a long stall (debugger, minimized window) cannot dump a burst
//! of catch-up simulation into the scenes.

mod frame_clock;

pub use frame_clock::{FpsGovernor, FrameClock, FrameTime};
