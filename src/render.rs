//! Abstract 2D drawing surface
//!
//! The simulation issues drawing commands against the `Surface` trait and
//! never touches a concrete backend. `DrawList` records the exact command
//! sequence (used by tests and the headless demo); `NullSurface` discards
//! everything for pure-logic ticking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGB color, components in [0, 1]. Alpha travels separately per command.
pub type Color = [f32; 3];

/// Named palette used by the simulation
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0];
    /// CSS saddlebrown (139, 69, 19)
    pub const SADDLE_BROWN: Color = [0.545, 0.271, 0.075];
    /// CSS orange (255, 165, 0)
    pub const ORANGE: Color = [1.0, 0.647, 0.0];
    /// CSS darkgray (169, 169, 169)
    pub const GREY: Color = [0.663, 0.663, 0.663];
    pub const YELLOW: Color = [1.0, 1.0, 0.0];
}

/// A 2D drawing target. Radii must already be clamped to >= 0 by callers;
/// implementations may assume valid arguments.
pub trait Surface {
    /// Erase the full canvas
    fn clear(&mut self);
    /// Filled circle with per-call alpha
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);
    /// Filled arbitrary polygon, opaque
    fn fill_polygon(&mut self, vertices: &[Vec2], color: Color);
}

/// One recorded drawing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    },
    Polygon {
        vertices: Vec<Vec2>,
        color: Color,
    },
}

/// Surface that records commands in issue order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the list empty for the next frame
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        debug_assert!(radius >= 0.0, "negative radius reached the surface");
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn fill_polygon(&mut self, vertices: &[Vec2], color: Color) {
        self.commands.push(DrawCmd::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }
}

/// Surface that discards all commands (headless ticking)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _alpha: f32) {}
    fn fill_polygon(&mut self, _vertices: &[Vec2], _color: Color) {}
}
