use crate::{Body, Config, InputFrame, Side};

/// Read-only view an agent decides from
#[derive(Debug, Clone, Copy)]
pub struct Perception<'a> {
    pub side: Side,
    pub body: Body,
    pub ball: Body,
    /// Keyboard frame, only handed to the player's brain
    pub input: Option<&'a InputFrame>,
    pub config: &'a Config,
}

/// What an agent wants to do this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Decision {
    /// `None` keeps the current horizontal velocity
    pub vel_x: Option<f32>,
    /// Only honoured while grounded
    pub jump: bool,
}

impl Decision {
    pub fn hold() -> Self {
        Self::default()
    }

    pub fn moving(vel_x: f32, jump: bool) -> Self {
        Self {
            vel_x: Some(vel_x),
            jump,
        }
    }
}

/// Decision source for an agent. Physics, clamping and the jump gate are shared;
/// a strategy only chooses velocity and whether to jump.
pub trait Strategy: Send + Sync {
    fn decide(&mut self, view: &Perception) -> Decision;

    fn name(&self) -> &'static str;
}

/// Keyboard-driven player
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanStrategy;

impl Strategy for HumanStrategy {
    fn decide(&mut self, view: &Perception) -> Decision {
        let input = view.input.copied().unwrap_or_default();
        let vel_x = input.dir() as f32 * view.config.player_speed;
        Decision::moving(vel_x, input.jump_pressed)
    }

    fn name(&self) -> &'static str {
        "human"
    }
}
