//! Shared utilities.
//!
//! Helpers for frame pacing and animation-clock playback.

pub mod clock;
pub mod frame_timing;
