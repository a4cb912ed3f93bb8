//! Shared utilities: per-frame smoothing math and frame timing.

pub mod frame_timing;
pub mod smoothing;
