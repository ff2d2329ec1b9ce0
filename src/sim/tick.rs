//! Fixed timestep simulation tick
//!
//! One call to `tick` advances the whole simulation by one frame and issues
//! the frame's drawing commands. Integration is frame-based: the external
//! driver targets ~60 Hz and the sim never looks at wall-clock time.

use glam::Vec2;
use rand::Rng;

use super::state::{Particle, Shape, SimulationState};
use crate::consts::*;
use crate::render::{Surface, colors};

/// Input captured since the previous tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest direction received, if any. Last write wins; `None` leaves
    /// the current velocity untouched.
    pub direction: Option<super::state::Direction>,
}

/// Advance the simulation by one tick and render the frame
pub fn tick(state: &mut SimulationState, input: &TickInput, surface: &mut impl Surface) {
    if let Some(dir) = input.direction {
        state.player.set_direction(dir);
    }

    surface.clear();

    advance_stars(state);
    draw_stars(state, surface);

    let prev_pos = state.player.pos;
    state.player.pos += state.player.vel;

    // One trail puff per tick at the updated position
    let puff = Particle::trail(&mut state.rng, state.player.pos);
    state.particles.push(puff);

    bounce_off_walls(state);

    draw_silhouette(state, surface);
    draw_trail(state, surface);
    state.player.record_trail(prev_pos);
    draw_pulse(state, surface);
    state.player.pulse += PULSE_STEP;

    // Shrink back once the asteroid would cover the canvas
    if state.player.radius >= state.width / 2.0 || state.player.radius >= state.height / 2.0 {
        state.player.radius = PLAYER_BASE_RADIUS;
    }

    check_level_up(state);
    advance_shapes(state, surface);
    advance_particles(state, surface);

    state.time_ticks += 1;
}

/// Scroll every star downward, recycling at the bottom edge
fn advance_stars(state: &mut SimulationState) {
    let (width, height) = (state.width, state.height);
    let rng = &mut state.rng;
    for star in &mut state.stars {
        star.pos.y += star.speed;
        if star.pos.y > height {
            star.recycle(rng, width);
        }
    }
}

fn draw_stars(state: &SimulationState, surface: &mut impl Surface) {
    for star in &state.stars {
        surface.fill_circle(star.pos, star.size, colors::WHITE, 1.0);
    }
}

/// Flip velocity when the next step would leave the canvas.
///
/// The lookahead runs against the already-updated position and only the
/// velocity flips; the position correction lands on the next tick. This
/// one-tick lag is kept on purpose, it is how the game has always bounced.
fn bounce_off_walls(state: &mut SimulationState) {
    let p = &mut state.player;
    if p.pos.x + p.radius + p.vel.x > state.width || p.pos.x - p.radius + p.vel.x < 0.0 {
        p.vel.x = -p.vel.x;
    }
    if p.pos.y + p.radius + p.vel.y > state.height || p.pos.y - p.radius + p.vel.y < 0.0 {
        p.vel.y = -p.vel.y;
    }
}

/// Irregular asteroid outline, re-rolled every frame so it flickers
fn draw_silhouette(state: &mut SimulationState, surface: &mut impl Surface) {
    let center = state.player.pos;
    let radius = state.player.radius;
    let rng = &mut state.rng;

    let mut vertices = Vec::with_capacity(SILHOUETTE_SEGMENTS);
    for i in 0..SILHOUETTE_SEGMENTS {
        let theta = i as f32 / SILHOUETTE_SEGMENTS as f32 * std::f32::consts::TAU;
        let rad = radius + SILHOUETTE_NOISE * (0.5 - rng.random::<f32>());
        vertices.push(center + Vec2::new(rad * theta.cos(), rad * theta.sin()));
    }
    surface.fill_polygon(&vertices, colors::SADDLE_BROWN);
}

/// Fading afterimage: newest entries nearly opaque, oldest nearly gone
fn draw_trail(state: &SimulationState, surface: &mut impl Surface) {
    let p = &state.player;
    let len = p.trail.len() as f32;
    for (i, &pos) in p.trail.iter().enumerate() {
        let alpha = 1.0 - i as f32 / len;
        surface.fill_circle(pos, p.radius.max(0.0), colors::ORANGE, alpha);
    }
}

fn draw_pulse(state: &SimulationState, surface: &mut impl Surface) {
    let p = &state.player;
    let radius = (p.radius + p.pulse.sin() * PULSE_AMPLITUDE).max(0.0);
    surface.fill_circle(p.pos, radius, colors::SADDLE_BROWN, PULSE_ALPHA);
}

/// Level up once the player outgrows the current threshold, giving every
/// unconsumed shape a one-time growth spurt
fn check_level_up(state: &mut SimulationState) {
    if state.player.radius > state.level as f32 * LEVEL_RADIUS_STEP {
        state.level += 1;
        log::info!("level up to {}", state.level);
        for shape in &mut state.shapes {
            if !shape.consumed {
                shape.radius *= LEVEL_SHAPE_GROWTH;
            }
        }
    }
}

/// Draw the shape field, consume overlapped smaller shapes, decay consumed
/// ones and respawn their slots in place
fn advance_shapes(state: &mut SimulationState, surface: &mut impl Surface) {
    let (width, height) = (state.width, state.height);

    for i in 0..state.shapes.len() {
        let (pos, radius, opacity) = {
            let s = &state.shapes[i];
            (s.pos, s.radius, s.opacity)
        };
        // Clamp for the draw call only; stored radius is left alone
        surface.fill_circle(pos, radius.max(0.0), colors::GREY, opacity.clamp(0.0, 1.0));

        if !state.shapes[i].consumed {
            let distance = state.player.pos.distance(pos);
            if distance < state.player.radius + radius && state.player.radius > radius {
                state.shapes[i].consumed = true;
                state.score += 1;
                state.player.radius += CONSUME_GROWTH;
                log::debug!("shape {i} consumed, score {}", state.score);

                for _ in 0..EXPLOSION_PARTICLES {
                    let particle = Particle::explosion(&mut state.rng, pos);
                    state.particles.push(particle);
                }
            }
        }

        if state.shapes[i].consumed {
            {
                let shape = &mut state.shapes[i];
                // Both decays are gated on the radius floor. Below it the
                // shape goes static until the dual exit condition fires;
                // unifying the thresholds would change long-run behavior.
                if shape.radius > SHAPE_DECAY_FLOOR {
                    shape.radius -= SHAPE_RADIUS_DECAY;
                    shape.opacity -= SHAPE_OPACITY_DECAY;
                }
            }
            if state.shapes[i].opacity <= 0.0 || state.shapes[i].radius <= 0.0 {
                let fresh = Shape::spawn(&mut state.rng, width, height);
                state.shapes[i] = fresh;
            }
        }
    }
}

/// Integrate, draw, and cull particles. Reverse order keeps the layering of
/// newest-on-bottom; culling is a single retain pass instead of
/// splice-during-iteration.
fn advance_particles(state: &mut SimulationState, surface: &mut impl Surface) {
    for particle in state.particles.iter_mut().rev() {
        particle.pos += particle.vel;
        particle.life -= particle.shrink;
        particle.radius -= particle.shrink;
        surface.fill_circle(particle.pos, particle.radius.max(0.0), particle.color, 1.0);
    }
    state.particles.retain(|p| p.life > 0.0 && p.radius > 0.0);
}
