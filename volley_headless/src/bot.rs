//! Scripted stand-ins for the human at the keyboard

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use volley_core::{Config, Snapshot};

use crate::input::Keyboard;

/// Which bot drives the left player
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    /// Never touches the keyboard
    Idle,
    /// Runs under the ball and jumps when it is close
    Chase,
    /// Mashes keys from a seeded RNG
    Random,
}

pub struct Bot {
    kind: BotKind,
    rng: StdRng,
    hold_ticks: u32,
}

impl Bot {
    pub fn new(kind: BotKind, seed: u64) -> Self {
        Self {
            kind,
            rng: StdRng::seed_from_u64(seed),
            hold_ticks: 0,
        }
    }

    pub fn kind(&self) -> BotKind {
        self.kind
    }

    /// Press and release keys for the next tick
    pub fn drive(&mut self, snapshot: &Snapshot, config: &Config, keyboard: &mut Keyboard) {
        match self.kind {
            BotKind::Idle => keyboard.release_all(),
            BotKind::Chase => chase(snapshot, config, keyboard),
            BotKind::Random => self.mash(keyboard),
        }
    }

    fn mash(&mut self, keyboard: &mut Keyboard) {
        if self.hold_ticks > 0 {
            self.hold_ticks -= 1;
            return;
        }

        for key in ["a", "d", "w"] {
            keyboard.key_up(key);
        }
        match self.rng.gen_range(0..3) {
            0 => keyboard.key_down("a"),
            1 => keyboard.key_down("d"),
            _ => {}
        }
        if self.rng.gen_bool(0.3) {
            keyboard.key_down("w");
        }
        self.hold_ticks = self.rng.gen_range(20..400);
    }
}

/// Stay slightly left of the ball so hits send it toward the net
fn chase(snapshot: &Snapshot, config: &Config, keyboard: &mut Keyboard) {
    let player = snapshot.player.center;
    let ball = snapshot.ball.center;
    let target = ball.x - config.ball_radius * 0.75;
    // Jump fires on the press edge, so let go for a tick after each press
    let was_jumping = keyboard.is_held("ArrowUp");

    keyboard.release_all();
    if target < player.x - 1.0 {
        keyboard.key_down("ArrowLeft");
    } else if target > player.x + 1.0 {
        keyboard.key_down("ArrowRight");
    }

    let ball_on_our_half = ball.x <= config.net_x();
    let reach = config.jump_impulse * config.jump_impulse / (2.0 * config.gravity);
    if !was_jumping && ball_on_our_half && player.distance(ball) < reach {
        keyboard.key_down("ArrowUp");
    }
}
