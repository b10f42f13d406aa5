use log::{debug, info};
use serde_json::json;
use volley_core::{Config, ConfigError, Game, Snapshot};

use crate::bot::Bot;
use crate::input::Keyboard;

/// Match driven tick by tick without a window: bot → keyboard → core
pub struct HeadlessMatch {
    game: Game,
    keyboard: Keyboard,
    bot: Bot,
    rallies: u32,
    longest_rally: u64,
    rally_start: u64,
}

impl HeadlessMatch {
    pub fn new(config: Config, bot: Bot) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Game::new(config)?,
            keyboard: Keyboard::new(),
            bot,
            rallies: 0,
            longest_rally: 0,
            rally_start: 0,
        })
    }

    /// One frame: the bot sees last frame's snapshot, then the core advances
    pub fn step(&mut self) -> Snapshot {
        let before = self.game.snapshot();
        self.bot.drive(&before, self.game.config(), &mut self.keyboard);
        let input = self.keyboard.frame();
        self.game.step(&input);

        let snapshot = self.game.snapshot();
        if !before.ball_in_play && snapshot.ball_in_play {
            self.rally_start = snapshot.tick;
            debug!("rally started at tick {}", snapshot.tick);
        }

        let events = self.game.events();
        if events.player_scored || events.ai_scored {
            self.rallies += 1;
            let length = snapshot.tick.saturating_sub(self.rally_start);
            self.longest_rally = self.longest_rally.max(length);
            info!(
                "tick {}: {} {}:{} (rally {} ticks)",
                snapshot.tick,
                if events.player_scored { "player scores" } else { "ai scores" },
                snapshot.score.player,
                snapshot.score.ai,
                length
            );
        }
        snapshot
    }

    pub fn run(&mut self, ticks: u64) -> Snapshot {
        let mut snapshot = self.game.snapshot();
        for _ in 0..ticks {
            snapshot = self.step();
        }
        snapshot
    }

    pub fn rallies(&self) -> u32 {
        self.rallies
    }

    pub fn longest_rally(&self) -> u64 {
        self.longest_rally
    }

    pub fn summary_json(&self) -> serde_json::Value {
        json!({
            "bot": format!("{:?}", self.bot.kind()),
            "snapshot": self.game.snapshot(),
            "rallies": self.rallies,
            "longest_rally_ticks": self.longest_rally,
        })
    }
}
