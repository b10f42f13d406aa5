use hecs::{Entity, World};
use log::info;
use serde::Serialize;

use crate::{
    create_agent, create_ball, step, Ball, Body, Brain, Circle, Clock, Config, ConfigError,
    Events, HumanStrategy, InputFrame, Score, Side, Strategy, TrajectoryPredictor,
};

/// Read-only view handed to the renderer once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: Circle,
    pub opponent: Circle,
    pub ball: Circle,
    pub ball_in_play: bool,
    pub score: Score,
}

/// A whole match: world, resources and the three entities
pub struct Game {
    world: World,
    clock: Clock,
    config: Config,
    score: Score,
    events: Events,
    player: Entity,
    opponent: Entity,
    ball: Entity,
}

impl Game {
    /// Keyboard player on the left, trajectory predictor on the right
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_strategies(config, HumanStrategy, TrajectoryPredictor)
    }

    pub fn with_strategies(
        config: Config,
        player: impl Strategy + 'static,
        opponent: impl Strategy + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let player = create_agent(&mut world, &config, Side::Left, Brain::new(player));
        let opponent = create_agent(&mut world, &config, Side::Right, Brain::new(opponent));
        let ball = create_ball(&mut world, &config, config.serve_point(Side::Left));

        info!(
            "match ready: court {}x{}, ground at {:.0}",
            config.window_width,
            config.window_height,
            config.ground_level()
        );

        Ok(Self {
            world,
            clock: Clock::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            player,
            opponent,
            ball,
        })
    }

    /// Advance one tick with this frame's player input
    pub fn step(&mut self, input: &InputFrame) {
        step(
            &mut self.world,
            &mut self.clock,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.clock.tick,
            player: self.player_body().circle,
            opponent: self.opponent_body().circle,
            ball: self.ball_body().circle,
            ball_in_play: self.ball_in_play(),
            score: self.score,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.clock.tick
    }

    pub fn player_body(&self) -> Body {
        self.body(self.player)
    }

    pub fn opponent_body(&self) -> Body {
        self.body(self.opponent)
    }

    pub fn ball_body(&self) -> Body {
        self.body(self.ball)
    }

    pub fn ball_in_play(&self) -> bool {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| ball.in_play)
            .expect("ball entity is never despawned")
    }

    /// Copy of an entity's body. The three entities are never despawned.
    fn body(&self, entity: Entity) -> Body {
        self.world
            .get::<&Body>(entity)
            .map(|body| *body)
            .expect("match entities are never despawned")
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("tick", &self.clock.tick)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}
