use hecs::World;

use crate::{Agent, Ball, Body, Config};

/// Integrate agents, confine them to their half and land them on the ground
pub fn move_agents(world: &mut World, config: &Config) {
    let ground = config.ground_level();

    for (_entity, (body, agent)) in world.query_mut::<(&mut Body, &Agent)>() {
        body.integrate(config.gravity);

        // Hard clamp, no bounce
        body.circle.center.x = config.clamp_agent_x(agent.side, body.circle.center.x);

        if body.circle.center.y > ground {
            body.circle.center.y = ground;
            body.vel.y = 0.0;
            body.airborne = false;
        }
    }
}

/// Integrate the ball while a rally is running; a resting ball stays put
pub fn move_ball(world: &mut World, config: &Config) {
    let ground = config.ground_level();

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        if ball.in_play {
            body.integrate(config.gravity);
            body.update_airborne(ground);
            ball.bounds = body.circle.bounding_rect();
        }
    }
}
