//! Astrograze - a drifting-asteroid arcade loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player kinematics, shape field, particles, starfield)
//! - `render`: Abstract 2D drawing surface the simulation issues commands to

pub mod render;
pub mod sim;

pub use render::{DrawCmd, DrawList, NullSurface, Surface};
pub use sim::{Direction, SimulationState, TickInput, tick};

/// Game tuning constants
pub mod consts {
    /// Target tick rate of the external driver (frame-based, not time-based)
    pub const TICK_HZ: u32 = 60;

    /// Player baseline radius, also the shrink-back value when growth caps out
    pub const PLAYER_BASE_RADIUS: f32 = 20.0;
    /// Axis-locked movement speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Maximum trail positions retained (newest first)
    pub const TRAIL_LENGTH: usize = 100;
    /// Pulse phase increment per tick (radians)
    pub const PULSE_STEP: f32 = 0.01;
    /// Amplitude of the pulsing halo circle
    pub const PULSE_AMPLITUDE: f32 = 2.0;
    /// Alpha of the pulsing halo circle
    pub const PULSE_ALPHA: f32 = 0.5;
    /// Vertex count of the asteroid silhouette polygon
    pub const SILHOUETTE_SEGMENTS: usize = 30;
    /// Magnitude of per-vertex silhouette noise (re-rolled every tick)
    pub const SILHOUETTE_NOISE: f32 = 3.0;

    /// Fixed number of consumable shapes (slots are recycled, never deleted)
    pub const SHAPE_COUNT: usize = 40;
    pub const SHAPE_MIN_RADIUS: f32 = 5.0;
    pub const SHAPE_MAX_RADIUS: f32 = 15.0;
    /// Radius lost per tick while a consumed shape decays
    pub const SHAPE_RADIUS_DECAY: f32 = 0.1;
    /// Opacity lost per tick while a consumed shape decays
    pub const SHAPE_OPACITY_DECAY: f32 = 0.01;
    /// Decay only runs while radius is above this floor
    pub const SHAPE_DECAY_FLOOR: f32 = 0.1;
    /// Player radius gained per consumed shape
    pub const CONSUME_GROWTH: f32 = 1.0;

    /// Fixed number of background stars (recycled at the bottom edge)
    pub const STAR_COUNT: usize = 200;
    pub const STAR_MAX_SIZE: f32 = 1.5;
    pub const STAR_MIN_SPEED: f32 = 1.0;
    pub const STAR_MAX_SPEED: f32 = 4.0;

    /// Explosion burst size per consumption
    pub const EXPLOSION_PARTICLES: usize = 20;
    /// Explosion velocity components are uniform in +/- half this spread
    pub const EXPLOSION_SPREAD: f32 = 5.0;
    pub const EXPLOSION_LIFE: f32 = 1.0;
    pub const EXPLOSION_SHRINK: f32 = 0.03;
    /// Trail-puff velocity components are uniform in +/- half this spread
    pub const TRAIL_SPREAD: f32 = 2.0;
    pub const TRAIL_LIFE: f32 = 0.5;
    pub const TRAIL_SHRINK: f32 = 0.01;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 3.0;

    /// Level-up threshold: player radius must exceed level * this step
    pub const LEVEL_RADIUS_STEP: f32 = 50.0;
    /// One-time radius multiplier applied to unconsumed shapes on level-up
    pub const LEVEL_SHAPE_GROWTH: f32 = 1.5;
}
