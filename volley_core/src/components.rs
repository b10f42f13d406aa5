use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Circle, Rect, Strategy};

/// Half-court an agent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,  // Human player
    Right, // Scripted opponent
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Kinematic state shared by every mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub circle: Circle,
    pub vel: Vec2,
    pub airborne: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            circle: Circle::new(pos, radius),
            vel: Vec2::ZERO,
            airborne: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.circle.center
    }

    /// Advance one tick: gravity goes into the velocity before the velocity moves the body
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.circle.center += self.vel;
    }

    /// Airborne unless resting on the ground without sinking further
    pub fn update_airborne(&mut self, ground: f32) {
        self.airborne = !(self.circle.center.y == ground && self.vel.y >= 0.0);
    }
}

/// Agent component - a player or the opponent, confined to one half
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub side: Side,
}

impl Agent {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Ball component - the volleyball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub in_play: bool,
    pub bounds: Rect, // Bounding rectangle, used for the net test
}

impl Ball {
    pub fn new(body: &Body) -> Self {
        Self {
            in_play: false,
            bounds: body.circle.bounding_rect(),
        }
    }

    /// Park the ball at a serve point, at rest above the ground
    pub fn serve_from(&mut self, body: &mut Body, point: Vec2, ground: f32) {
        body.circle.center = point;
        body.vel = Vec2::ZERO;
        body.update_airborne(ground);
        self.in_play = false;
        self.bounds = body.circle.bounding_rect();
    }
}

/// Decision source driving an agent
pub struct Brain(pub Box<dyn Strategy>);

impl Brain {
    pub fn new(strategy: impl Strategy + 'static) -> Self {
        Self(Box::new(strategy))
    }
}

impl std::fmt::Debug for Brain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Brain").field(&self.0.name()).finish()
    }
}
