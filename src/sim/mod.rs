//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-based fixed timestep only (one call = one tick)
//! - Seeded RNG only
//! - Stable slot order for shapes and stars (recycled in place)
//! - No platform dependencies; drawing goes through the `Surface` trait

pub mod state;
pub mod tick;

pub use state::{Direction, Particle, Player, Shape, SimulationState, Star};
pub use tick::{TickInput, tick};
