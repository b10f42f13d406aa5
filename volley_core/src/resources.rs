use serde::{Deserialize, Serialize};

use crate::Side;

/// Simulation clock, counted in fixed ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    pub tick: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Match score tracking, kept for the lifetime of the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32, // Left half
    pub ai: u32,     // Right half
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one point to the owner of `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.player += 1,
            Side::Right => self.ai += 1,
        }
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.player,
            Side::Right => self.ai,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.ai
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_jumped: bool,
    pub opponent_jumped: bool,
    pub ball_hit_player: bool,
    pub ball_hit_opponent: bool,
    pub ball_hit_net: bool,
    pub ball_hit_wall: bool,
    pub player_scored: bool,
    pub ai_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn jumped(&mut self, side: Side) {
        match side {
            Side::Left => self.player_jumped = true,
            Side::Right => self.opponent_jumped = true,
        }
    }

    pub fn hit_by(&mut self, side: Side) {
        match side {
            Side::Left => self.ball_hit_player = true,
            Side::Right => self.ball_hit_opponent = true,
        }
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.player_scored = true,
            Side::Right => self.ai_scored = true,
        }
    }
}

/// Per-frame player input, as delivered by the input collaborator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_pressed: bool, // Edge: true only on the frame the key went down
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the alternative key bindings (A/Left, D/Right, W/Up) into one frame
    pub fn from_keys(a: bool, left: bool, d: bool, right: bool, w: bool, up: bool) -> Self {
        Self {
            move_left: a || left,
            move_right: d || right,
            jump_pressed: w || up,
        }
    }

    /// -1 = left, 0 = stop, 1 = right. Left wins when both are held.
    pub fn dir(&self) -> i8 {
        if self.move_left {
            -1
        } else if self.move_right {
            1
        } else {
            0
        }
    }
}
