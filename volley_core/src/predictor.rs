//! Ballistic landing prediction for the scripted opponent.
//!
//! The prediction steps the ball forward with the live gravity constant and
//! ignores anything else, so the opponent is good but not perfect.

use glam::Vec2;
use log::trace;

use crate::{Body, Config, Decision, Perception, Strategy};

/// Where the ball is expected to meet the ground
pub fn predict_landing(ball: &Body, config: &Config) -> Vec2 {
    let ground = config.ground_level();
    let pos = ball.pos();

    // A resting ball is about to be served: aim slightly past it
    if ball.vel.y == 0.0 {
        return Vec2::new(pos.x + config.rest_landing_offset, ground);
    }

    let mut y = pos.y;
    let mut vy = ball.vel.y;
    let mut steps: u32 = 0;
    while y < ground && steps < config.prediction_max_steps {
        vy += config.gravity;
        y += vy;
        steps += 1;
    }

    Vec2::new(
        pos.x + ball.vel.x * steps as f32 + config.lead_landing_offset,
        ground,
    )
}

/// Opponent brain: run to the predicted landing point, jump under a resting ball
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryPredictor;

impl Strategy for TrajectoryPredictor {
    fn decide(&mut self, view: &Perception) -> Decision {
        // Only reacts while the ball is on our half; otherwise keep the last velocity
        if view.config.side_of(view.ball.pos().x) != view.side {
            return Decision::hold();
        }

        let target = predict_landing(&view.ball, view.config);
        let delta = target - view.body.pos();
        let length = delta.length();

        let vel_x = if length > 0.0 {
            delta.x / length * view.config.opponent_speed
        } else {
            0.0
        };
        let jump = view.ball.vel.y == 0.0 && delta.x.abs() < view.config.jump_threshold;

        trace!(
            "predictor: target=({:.1}, {:.1}) vel_x={:.3} jump={}",
            target.x,
            target.y,
            vel_x,
            jump
        );

        Decision::moving(vel_x, jump)
    }

    fn name(&self) -> &'static str {
        "predictor"
    }
}
