use hecs::World;
use log::info;

use crate::{Ball, Body, Config, Events, Score};

/// End the rally when the ball drops below ground level.
///
/// The owner of the half the ball landed in takes the point and the ball
/// is parked, at rest, on that half's serve point.
pub fn check_ground(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let ground = config.ground_level();

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        let pos = body.pos();
        if pos.y <= ground {
            continue;
        }

        let side = config.side_of(pos.x);
        score.award(side);
        events.scored(side);
        ball.serve_from(body, config.serve_point(side), ground);

        info!(
            "point to {:?} (ball landed at x={:.1}), score {}:{}",
            side, pos.x, score.player, score.ai
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    fn drop_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
        let ball = create_ball(world, config, pos);
        if let Ok(mut body) = world.get::<&mut Body>(ball) {
            body.vel = vel;
        }
        if let Ok(mut state) = world.get::<&mut Ball>(ball) {
            state.in_play = true;
        }
        ball
    }

    #[test]
    fn test_ai_scores_when_ball_lands_on_right_half() {
        let (mut world, config, mut score, mut events) = setup_world();
        let ball = drop_ball(&mut world, &config, Vec2::new(900.0, 577.0), Vec2::new(0.2, 0.9));

        check_ground(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.ai, 1, "AI should score");
        assert_eq!(score.player, 0);
        assert!(events.ai_scored);

        let body = *world.get::<&Body>(ball).expect("ball body");
        assert_eq!(body.pos(), Vec2::new(810.0, 400.0));
        assert_eq!(body.vel, Vec2::ZERO);
        let in_play = world.get::<&Ball>(ball).map(|b| b.in_play).ok();
        assert_eq!(in_play, Some(false), "Back to resting");
    }

    #[test]
    fn test_player_scores_when_ball_lands_on_left_half() {
        let (mut world, config, mut score, mut events) = setup_world();
        let ball = drop_ball(&mut world, &config, Vec2::new(100.0, 580.0), Vec2::new(-0.2, 0.9));

        check_ground(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.player, 1);
        assert_eq!(score.ai, 0);
        assert!(events.player_scored);
        let pos = world.get::<&Body>(ball).map(|b| b.pos()).ok();
        assert_eq!(pos, Some(config.serve_point(Side::Left)));
    }

    #[test]
    fn test_no_score_at_ground_level() {
        let (mut world, config, mut score, mut events) = setup_world();
        drop_ball(&mut world, &config, Vec2::new(900.0, 576.0), Vec2::new(0.0, 0.5));

        check_ground(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.total(), 0, "Touching ground level is not yet an impact");
        assert!(!events.ai_scored && !events.player_scored);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        let ball = drop_ball(&mut world, &config, Vec2::new(900.0, 600.0), Vec2::ZERO);
        check_ground(&mut world, &config, &mut score, &mut events);
        events.clear();

        if let Ok(mut body) = world.get::<&mut Body>(ball) {
            body.circle.center = Vec2::new(950.0, 600.0);
        }
        check_ground(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.ai, 2, "Scores should accumulate");
        assert_eq!(score.player, 0);
    }

    proptest! {
        #[test]
        fn prop_exactly_one_side_scores(x in 0.0f32..1080.0, depth in 0.001f32..50.0) {
            let (mut world, config, mut score, mut events) = setup_world();
            drop_ball(&mut world, &config, Vec2::new(x, config.ground_level() + depth), Vec2::ZERO);

            check_ground(&mut world, &config, &mut score, &mut events);

            prop_assert_eq!(score.total(), 1);
            let expected = config.side_of(x);
            prop_assert_eq!(score.points(expected), 1);
            prop_assert!(events.player_scored != events.ai_scored);
        }
    }
}
