//! Simulation state and entity types
//!
//! Everything the per-tick loop mutates lives here, owned by one
//! `SimulationState` - no ambient globals. Shapes and stars are fixed-size
//! slot sets recycled in place; particles are a pruned growth collection.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::{Color, colors};

/// Movement direction from the input collaborator (arrow keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player-controlled asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Pulse phase in radians; grows without bound, sin is periodic
    pub pulse: f32,
    /// Recent positions, newest first, capped at `TRAIL_LENGTH`
    pub trail: Vec<Vec2>,
}

impl Player {
    fn new() -> Self {
        Self {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(PLAYER_SPEED, -PLAYER_SPEED),
            radius: PLAYER_BASE_RADIUS,
            pulse: 0.0,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Axis-locked velocity: last key wins, no diagonals
    pub fn set_direction(&mut self, dir: Direction) {
        self.vel = match dir {
            Direction::Up => Vec2::new(0.0, -PLAYER_SPEED),
            Direction::Down => Vec2::new(0.0, PLAYER_SPEED),
            Direction::Left => Vec2::new(-PLAYER_SPEED, 0.0),
            Direction::Right => Vec2::new(PLAYER_SPEED, 0.0),
        };
    }

    /// Record a position to the trail front, dropping the oldest beyond cap
    pub fn record_trail(&mut self, pos: Vec2) {
        self.trail.insert(0, pos);
        self.trail.truncate(TRAIL_LENGTH);
    }
}

/// A consumable shape slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub pos: Vec2,
    pub radius: f32,
    /// Draw alpha in [0, 1]
    pub opacity: f32,
    /// Once set, radius and opacity only decay until the slot is replaced
    pub consumed: bool,
}

impl Shape {
    /// Fresh unconsumed shape at a random spot on the canvas
    pub fn spawn(rng: &mut Pcg32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
            radius: rng.random_range(SHAPE_MIN_RADIUS..SHAPE_MAX_RADIUS),
            opacity: 1.0,
            consumed: false,
        }
    }
}

/// A short-lived visual particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub life: f32,
    /// Per-tick decay applied to both life and radius
    pub shrink: f32,
    pub color: Color,
}

impl Particle {
    /// Puff left behind at the player position, one per tick
    pub fn trail(rng: &mut Pcg32, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * TRAIL_SPREAD,
                (rng.random::<f32>() - 0.5) * TRAIL_SPREAD,
            ),
            radius: rng.random_range(PARTICLE_MIN_RADIUS..PARTICLE_MAX_RADIUS),
            life: TRAIL_LIFE,
            shrink: TRAIL_SHRINK,
            color: colors::YELLOW,
        }
    }

    /// Explosion fragment spawned at a consumed shape's position
    pub fn explosion(rng: &mut Pcg32, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * EXPLOSION_SPREAD,
                (rng.random::<f32>() - 0.5) * EXPLOSION_SPREAD,
            ),
            radius: rng.random_range(PARTICLE_MIN_RADIUS..PARTICLE_MAX_RADIUS),
            life: EXPLOSION_LIFE,
            shrink: EXPLOSION_SHRINK,
            color: colors::YELLOW,
        }
    }
}

/// A background star scrolling downward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Star {
    /// Initial spawn: anywhere on the canvas
    pub fn spawn(rng: &mut Pcg32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
            size: rng.random_range(0.0..STAR_MAX_SIZE),
            speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
        }
    }

    /// In-place recycle at the top edge with fresh x/size/speed
    pub fn recycle(&mut self, rng: &mut Pcg32, width: f32) {
        self.pos.y = 0.0;
        self.pos.x = rng.random_range(0.0..width);
        self.size = rng.random_range(0.0..STAR_MAX_SIZE);
        self.speed = rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED);
    }
}

/// Complete simulation state (deterministic for a given seed and input tape)
#[derive(Debug, Clone, Serialize)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Canvas width, read-only after construction
    pub width: f32,
    /// Canvas height, read-only after construction
    pub height: f32,
    /// Ticks advanced so far
    pub time_ticks: u64,
    /// Consumption count, monotonically non-decreasing
    pub score: u64,
    /// Growth level, starts at 1
    pub level: u32,
    pub player: Player,
    /// Fixed `SHAPE_COUNT` slots, replaced in place on respawn
    pub shapes: Vec<Shape>,
    /// Fixed `STAR_COUNT` slots, recycled in place at the bottom edge
    pub stars: Vec<Star>,
    /// Active particles, pruned every tick
    #[serde(skip)]
    pub particles: Vec<Particle>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Create a state with the given canvas dimensions and seed, populating
    /// the star and shape fields
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| Star::spawn(&mut rng, width, height))
            .collect();
        let shapes = (0..SHAPE_COUNT)
            .map(|_| Shape::spawn(&mut rng, width, height))
            .collect();

        Self {
            seed,
            width,
            height,
            time_ticks: 0,
            score: 0,
            level: 1,
            player: Player::new(),
            shapes,
            stars,
            particles: Vec::new(),
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_populates_fields() {
        let state = SimulationState::new(800.0, 600.0, 42);

        assert_eq!(state.shapes.len(), SHAPE_COUNT);
        assert_eq!(state.stars.len(), STAR_COUNT);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_ticks, 0);

        for shape in &state.shapes {
            assert!(!shape.consumed);
            assert_eq!(shape.opacity, 1.0);
            assert!(shape.radius >= SHAPE_MIN_RADIUS && shape.radius < SHAPE_MAX_RADIUS);
            assert!(shape.pos.x >= 0.0 && shape.pos.x < 800.0);
            assert!(shape.pos.y >= 0.0 && shape.pos.y < 600.0);
        }
        for star in &state.stars {
            assert!(star.speed >= STAR_MIN_SPEED && star.speed < STAR_MAX_SPEED);
            assert!(star.size < STAR_MAX_SIZE);
        }
    }

    #[test]
    fn test_player_initial_kinematics() {
        let state = SimulationState::new(500.0, 500.0, 7);
        let p = &state.player;
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
        assert_eq!(p.vel, Vec2::new(2.0, -2.0));
        assert_eq!(p.radius, PLAYER_BASE_RADIUS);
        assert_eq!(p.pulse, 0.0);
        assert!(p.trail.is_empty());
    }

    #[test]
    fn test_direction_is_axis_locked() {
        let mut player = Player::new();

        player.set_direction(Direction::Up);
        assert_eq!(player.vel, Vec2::new(0.0, -2.0));

        player.set_direction(Direction::Right);
        assert_eq!(player.vel, Vec2::new(2.0, 0.0));

        player.set_direction(Direction::Down);
        assert_eq!(player.vel, Vec2::new(0.0, 2.0));

        player.set_direction(Direction::Left);
        assert_eq!(player.vel, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_trail_record_newest_first() {
        let mut player = Player::new();
        for i in 0..(TRAIL_LENGTH + 20) {
            player.record_trail(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(player.trail.len(), TRAIL_LENGTH);
        // Newest entry at the front
        assert_eq!(player.trail[0].x, (TRAIL_LENGTH + 19) as f32);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = SimulationState::new(640.0, 480.0, 1234);
        let b = SimulationState::new(640.0, 480.0, 1234);
        for (sa, sb) in a.shapes.iter().zip(&b.shapes) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.radius, sb.radius);
        }
        for (sa, sb) in a.stars.iter().zip(&b.stars) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.speed, sb.speed);
        }
    }
}
