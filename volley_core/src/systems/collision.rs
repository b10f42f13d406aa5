use glam::Vec2;
use hecs::World;
use log::debug;

use crate::{Agent, Ball, Body, Circle, Config, Events, Side};

/// Velocity given to the ball when an agent at `agent_pos` moving at `agent_vel` strikes it.
///
/// The ball leaves along the line from the agent's center through its own, with a fixed
/// "hit power" impulse (damped horizontally) plus a share of the agent's velocity.
/// Returns `None` when the centers coincide and there is no direction to hit along.
pub fn hit_response(
    ball_pos: Vec2,
    agent_pos: Vec2,
    agent_vel: Vec2,
    config: &Config,
) -> Option<Vec2> {
    let delta = ball_pos - agent_pos;
    if delta == Vec2::ZERO {
        return None;
    }

    let angle = delta.y.atan2(delta.x);
    let transfer = agent_vel * config.hit_velocity_transfer;
    Some(Vec2::new(
        angle.cos() * config.hit_power * config.hit_horizontal_scale + transfer.x,
        angle.sin() * config.hit_power + transfer.y,
    ))
}

/// Ball contacts for one tick, in fixed order: player, opponent, net, side walls.
///
/// A net or wall reflection can land on the same tick as an agent hit.
pub fn check_ball_contacts(world: &mut World, config: &Config, events: &mut Events) {
    // Read-only copies of the agents' shapes and velocities
    let agents: Vec<(Side, Circle, Vec2)> = world
        .query::<(&Body, &Agent)>()
        .iter()
        .map(|(_e, (body, agent))| (agent.side, body.circle, body.vel))
        .collect();

    let net = config.net_rect();

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        // Player first, then opponent
        for side in [Side::Left, Side::Right] {
            for &(_, circle, agent_vel) in agents.iter().filter(|(s, _, _)| *s == side) {
                if !body.circle.intersects(&circle) {
                    continue;
                }
                ball.in_play = true;
                events.hit_by(side);
                if let Some(vel) = hit_response(body.pos(), circle.center, agent_vel, config) {
                    body.vel = vel;
                }
                debug!(
                    "ball hit by {:?} agent, vel=({:.3}, {:.3})",
                    side, body.vel.x, body.vel.y
                );
            }
        }

        if ball.bounds.intersects(&net) {
            body.vel.x = -body.vel.x;
            events.ball_hit_net = true;
            debug!("ball hit the net at x={:.1}", body.pos().x);
        }

        let x = body.pos().x;
        if x < 0.0 || x > config.window_width {
            body.vel.x = -body.vel.x;
            events.ball_hit_wall = true;
            debug!("ball hit the side wall at x={:.1}", x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_agent, create_ball, Brain, HumanStrategy};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball_state(world: &World, entity: hecs::Entity) -> (Body, Ball) {
        let body = *world.get::<&Body>(entity).expect("ball has a body");
        let ball = *world.get::<&Ball>(entity).expect("ball component");
        (body, ball)
    }

    fn place(world: &mut World, entity: hecs::Entity, pos: Vec2, vel: Vec2) {
        let mut bounds = None;
        if let Ok(mut body) = world.get::<&mut Body>(entity) {
            body.circle.center = pos;
            body.vel = vel;
            bounds = Some(body.circle.bounding_rect());
        }
        if let (Ok(mut ball), Some(bounds)) = (world.get::<&mut Ball>(entity), bounds) {
            ball.bounds = bounds;
        }
    }

    #[test]
    fn test_hit_response_straight_up() {
        let config = Config::new();
        let vel = hit_response(
            Vec2::new(100.0, 50.0),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            &config,
        )
        .unwrap_or_default();
        assert_relative_eq!(vel.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(vel.y, -config.hit_power, epsilon = 1e-5);
    }

    #[test]
    fn test_hit_response_blends_agent_velocity() {
        let config = Config::new();
        let vel = hit_response(
            Vec2::new(150.0, 100.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.3, -1.0),
            &config,
        )
        .unwrap_or_default();
        assert_relative_eq!(vel.x, 1.8 * 0.6 + 0.3 * 0.2, epsilon = 1e-5);
        assert_relative_eq!(vel.y, -1.0 * 0.2, epsilon = 1e-5);
    }

    #[test]
    fn test_hit_response_coincident_centers_is_noop() {
        let config = Config::new();
        let p = Vec2::new(300.0, 300.0);
        assert_eq!(hit_response(p, p, Vec2::new(0.3, 0.0), &config), None);
    }

    #[test]
    fn test_player_hit_puts_ball_in_play() {
        let (mut world, config, mut events) = setup_world();
        let player = create_agent(&mut world, &config, Side::Left, Brain::new(HumanStrategy));
        let ball = create_ball(&mut world, &config, Vec2::new(270.0, 400.0));
        // Player below-left of the resting ball, running right
        place(&mut world, player, Vec2::new(250.0, 440.0), Vec2::new(0.3, 0.0));

        check_ball_contacts(&mut world, &config, &mut events);

        let (body, state) = ball_state(&world, ball);
        assert!(state.in_play);
        assert!(events.ball_hit_player);
        let angle = (400.0f32 - 440.0).atan2(270.0 - 250.0);
        assert_relative_eq!(body.vel.x, angle.cos() * 1.8 * 0.6 + 0.3 * 0.2, epsilon = 1e-5);
        assert!(body.vel.x > 0.3 * 0.2, "Deflection adds to the carried velocity");
        assert!(body.vel.y < 0.0, "Ball leaves upward");
    }

    #[test]
    fn test_opponent_response_applies_after_player() {
        let (mut world, config, mut events) = setup_world();
        let player = create_agent(&mut world, &config, Side::Left, Brain::new(HumanStrategy));
        let opponent = create_agent(&mut world, &config, Side::Right, Brain::new(HumanStrategy));
        let ball = create_ball(&mut world, &config, Vec2::new(540.0, 400.0));
        // Contrived overlap with both agents at once (clamping normally prevents this)
        place(&mut world, player, Vec2::new(500.0, 400.0), Vec2::ZERO);
        place(&mut world, opponent, Vec2::new(580.0, 400.0), Vec2::ZERO);
        place(&mut world, ball, Vec2::new(540.0, 400.0), Vec2::ZERO);

        check_ball_contacts(&mut world, &config, &mut events);

        assert!(events.ball_hit_player && events.ball_hit_opponent);
        let (body, _) = ball_state(&world, ball);
        // Opponent pushes left (-1.08), then the net flips it
        assert_relative_eq!(body.vel.x, 1.8 * 0.6, epsilon = 1e-5);
        assert!(events.ball_hit_net);
    }

    #[test]
    fn test_ball_reflects_off_net() {
        let (mut world, config, mut events) = setup_world();
        let ball = create_ball(&mut world, &config, Vec2::new(530.0, 450.0));
        place(&mut world, ball, Vec2::new(530.0, 450.0), Vec2::new(0.5, 0.7));

        check_ball_contacts(&mut world, &config, &mut events);

        let (body, _) = ball_state(&world, ball);
        assert_eq!(body.vel.x, -0.5);
        assert_eq!(body.vel.y, 0.7, "Vertical velocity unaffected");
        assert!(events.ball_hit_net);
    }

    #[test]
    fn test_ball_clears_net_top() {
        let (mut world, config, mut events) = setup_world();
        let ball = create_ball(&mut world, &config, Vec2::new(540.0, 200.0));
        place(&mut world, ball, Vec2::new(540.0, 200.0), Vec2::new(0.5, 0.0));

        check_ball_contacts(&mut world, &config, &mut events);

        let (body, _) = ball_state(&world, ball);
        assert_eq!(body.vel.x, 0.5);
        assert!(!events.ball_hit_net);
    }

    #[test]
    fn test_ball_reflects_off_side_walls() {
        let (mut world, config, mut events) = setup_world();
        let ball = create_ball(&mut world, &config, Vec2::new(-1.0, 300.0));
        place(&mut world, ball, Vec2::new(-1.0, 300.0), Vec2::new(-0.4, 0.0));

        check_ball_contacts(&mut world, &config, &mut events);
        assert_eq!(ball_state(&world, ball).0.vel.x, 0.4);
        assert!(events.ball_hit_wall);

        events.clear();
        place(&mut world, ball, Vec2::new(1081.0, 300.0), Vec2::new(0.4, 0.0));
        check_ball_contacts(&mut world, &config, &mut events);
        assert_eq!(ball_state(&world, ball).0.vel.x, -0.4);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_contact_leaves_ball_resting() {
        let (mut world, config, mut events) = setup_world();
        create_agent(&mut world, &config, Side::Left, Brain::new(HumanStrategy));
        let ball = create_ball(&mut world, &config, config.serve_point(Side::Left));

        check_ball_contacts(&mut world, &config, &mut events);

        let (body, state) = ball_state(&world, ball);
        assert!(!state.in_play);
        assert_eq!(body.vel, Vec2::ZERO);
        assert!(!events.ball_hit_player && !events.ball_hit_net && !events.ball_hit_wall);
    }

    proptest! {
        #[test]
        fn prop_hit_response_is_deterministic(
            bx in 0.0f32..1080.0, by in 0.0f32..720.0,
            ax in 0.0f32..1080.0, ay in 0.0f32..720.0,
            vx in -1.0f32..1.0, vy in -2.0f32..2.0,
        ) {
            let config = Config::new();
            let ball = Vec2::new(bx, by);
            let agent = Vec2::new(ax, ay);
            let vel = Vec2::new(vx, vy);
            prop_assert_eq!(
                hit_response(ball, agent, vel, &config),
                hit_response(ball, agent, vel, &config)
            );
        }

        #[test]
        fn prop_hit_pushes_ball_away_from_still_agent(
            bx in 0.0f32..1080.0, by in 0.0f32..720.0,
            ax in 0.0f32..1080.0, ay in 0.0f32..720.0,
        ) {
            let config = Config::new();
            let ball = Vec2::new(bx, by);
            let agent = Vec2::new(ax, ay);
            prop_assume!(ball.distance(agent) > 1e-3);
            let vel = hit_response(ball, agent, Vec2::ZERO, &config).unwrap_or_default();
            prop_assert!(vel.dot(ball - agent) > 0.0);
        }
    }
}
