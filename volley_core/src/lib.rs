pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod predictor;
pub mod resources;
pub mod strategy;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use predictor::*;
pub use resources::*;
pub use strategy::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the volleyball simulation
pub fn step(
    world: &mut World,
    clock: &mut Clock,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputFrame,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Brains decide (player from input, opponent from the predictor)
    decide_agents(world, input, config, events);

    // 2. Move agents and keep them on their half
    move_agents(world, config);

    // 3. Ball contacts: player, opponent, net, side walls
    check_ball_contacts(world, config, events);

    // 4. Ground impact ends the rally
    check_ground(world, config, score, events);

    // 5. Ball flight
    move_ball(world, config);

    clock.advance();
}

/// Helper to create an agent standing on its half's spawn point
pub fn create_agent(world: &mut World, config: &Config, side: Side, brain: Brain) -> hecs::Entity {
    let body = Body::new(config.agent_spawn(side), config.agent_radius);
    world.spawn((body, Agent::new(side), brain))
}

/// Helper to create the ball, resting at `pos`
pub fn create_ball(world: &mut World, config: &Config, pos: glam::Vec2) -> hecs::Entity {
    let mut body = Body::new(pos, config.ball_radius);
    body.update_airborne(config.ground_level());
    world.spawn((body, Ball::new(&body)))
}
