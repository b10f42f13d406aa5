use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Params, Rect, Side};

/// Rejected configuration, reported once at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("ground fraction must be in (0, 1], got {0}")]
    GroundFraction(f32),

    #[error("jump impulse must point up (negative y), got {0}")]
    JumpNotUpward(f32),

    #[error("serve height {serve} must be above ground level {ground}")]
    ServeBelowGround { serve: f32, ground: f32 },

    #[error("net height {net} exceeds window height {window}")]
    NetTooTall { net: f32, window: f32 },

    #[error("agent diameter {diameter} does not fit in a half court of width {half}")]
    AgentTooWide { diameter: f32, half: f32 },
}

/// Game configuration, fixed for the lifetime of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub ground_fraction: f32,
    pub gravity: f32,
    pub agent_radius: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub jump_impulse: f32,
    pub ball_radius: f32,
    pub serve_height: f32,
    pub hit_power: f32,
    pub hit_horizontal_scale: f32,
    pub hit_velocity_transfer: f32,
    pub net_width: f32,
    pub net_height: f32,
    pub rest_landing_offset: f32,
    pub lead_landing_offset: f32,
    pub jump_threshold: f32,
    pub prediction_max_steps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            ground_fraction: Params::GROUND_FRACTION,
            gravity: Params::GRAVITY,
            agent_radius: Params::AGENT_RADIUS,
            player_speed: Params::PLAYER_SPEED,
            opponent_speed: Params::OPPONENT_SPEED,
            jump_impulse: Params::JUMP_IMPULSE,
            ball_radius: Params::BALL_RADIUS,
            serve_height: Params::SERVE_HEIGHT,
            hit_power: Params::HIT_POWER,
            hit_horizontal_scale: Params::HIT_HORIZONTAL_SCALE,
            hit_velocity_transfer: Params::HIT_VELOCITY_TRANSFER,
            net_width: Params::NET_WIDTH,
            net_height: Params::NET_HEIGHT,
            rest_landing_offset: Params::REST_LANDING_OFFSET,
            lead_landing_offset: Params::LEAD_LANDING_OFFSET,
            jump_threshold: Params::JUMP_THRESHOLD,
            prediction_max_steps: Params::PREDICTION_MAX_STEPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y coordinate of the floor (screen space, y grows down)
    pub fn ground_level(&self) -> f32 {
        self.window_height * self.ground_fraction
    }

    /// X coordinate dividing the two half-courts
    pub fn net_x(&self) -> f32 {
        self.window_width / 2.0
    }

    /// Net collision zone, standing on the bottom edge of the window
    pub fn net_rect(&self) -> Rect {
        Rect::from_xywh(
            self.net_x() - self.net_width,
            self.window_height - self.net_height,
            self.net_width,
            self.net_height,
        )
    }

    /// Which half-court an X coordinate belongs to (the net line belongs to the left)
    pub fn side_of(&self, x: f32) -> Side {
        if x > self.net_x() {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// Allowed range for an agent's center X on its own half
    pub fn agent_x_bounds(&self, side: Side) -> (f32, f32) {
        let r = self.agent_radius;
        match side {
            Side::Left => (r, self.net_x() - r),
            Side::Right => (self.net_x() + r, self.window_width - r),
        }
    }

    pub fn clamp_agent_x(&self, side: Side, x: f32) -> f32 {
        let (min, max) = self.agent_x_bounds(side);
        x.clamp(min, max)
    }

    /// Where an agent stands at the start of the match
    pub fn agent_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.quarter_x(side), self.ground_level())
    }

    /// Ball resting point after a point is scored on `side`
    pub fn serve_point(&self, side: Side) -> Vec2 {
        Vec2::new(self.quarter_x(side), self.serve_height)
    }

    fn quarter_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.window_width * 0.25,
            Side::Right => self.window_width * 0.75,
        }
    }

    /// Check startup invariants; a config that passes cannot fault the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("gravity", self.gravity),
            ("agent_radius", self.agent_radius),
            ("ball_radius", self.ball_radius),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
            ("hit_power", self.hit_power),
            ("net_width", self.net_width),
            ("net_height", self.net_height),
        ];
        for (name, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.ground_fraction.is_nan()
            || self.ground_fraction <= 0.0
            || self.ground_fraction > 1.0
        {
            return Err(ConfigError::GroundFraction(self.ground_fraction));
        }
        if self.jump_impulse.is_nan() || self.jump_impulse >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }
        if self.serve_height.is_nan() || self.serve_height >= self.ground_level() {
            return Err(ConfigError::ServeBelowGround {
                serve: self.serve_height,
                ground: self.ground_level(),
            });
        }
        if self.net_height > self.window_height {
            return Err(ConfigError::NetTooTall {
                net: self.net_height,
                window: self.window_height,
            });
        }
        let diameter = self.agent_radius * 2.0;
        if diameter > self.net_x() {
            return Err(ConfigError::AgentTooWide {
                diameter,
                half: self.net_x(),
            });
        }
        if self.prediction_max_steps == 0 {
            return Err(ConfigError::NonPositive {
                name: "prediction_max_steps",
                value: 0.0,
            });
        }
        Ok(())
    }
}
