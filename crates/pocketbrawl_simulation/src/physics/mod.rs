//! Physics simulation module
//!
//! Gravity, velocity integration, ground and arena clamping.

pub mod integrator;

// Re-export основных типов
pub use integrator::{integrate, integrate_fighters};
