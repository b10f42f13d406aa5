use hecs::World;
use log::debug;

use crate::{Agent, Ball, Body, Brain, Config, Events, InputFrame, Perception, Side};

/// Ask every agent's brain for a decision and apply it to that agent's body
pub fn decide_agents(world: &mut World, input: &InputFrame, config: &Config, events: &mut Events) {
    // Snapshot the ball first so brains only ever see a copy
    let ball = {
        let mut ball_query = world.query::<(&Body, &Ball)>();
        ball_query.iter().next().map(|(_e, (body, _ball))| *body)
    };

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (body, agent, brain)) in world.query_mut::<(&mut Body, &Agent, &mut Brain)>() {
        let view = Perception {
            side: agent.side,
            body: *body,
            ball,
            // The opponent never sees the keyboard
            input: (agent.side == Side::Left).then_some(input),
            config,
        };
        let decision = brain.0.decide(&view);

        if let Some(vel_x) = decision.vel_x {
            body.vel.x = vel_x;
        }

        // No double jumps: the impulse only applies from the ground
        if decision.jump && !body.airborne {
            body.vel.y = config.jump_impulse;
            body.airborne = true;
            events.jumped(agent.side);
            debug!("{:?} agent jumped at x={:.1}", agent.side, body.pos().x);
        }
    }
}
