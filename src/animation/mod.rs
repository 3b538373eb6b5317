//! Per-frame animation: secretion-cycle particles and the idle sway.
//!
//! All motion is a pure function of the single elapsed-time clock supplied
//! by the rendering loop. Nothing here owns a timer and nothing integrates
//! deltas, so pausing, seeking, and replay are free.

pub mod idle;
pub mod secretion;

pub use secretion::{Particle, ParticleState};
