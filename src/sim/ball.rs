//! Ball integrator
//!
//! Position is advanced before velocity, and gravity only acts while the ball
//! is off the ground line, so a ball launched from the ground lands at its
//! launch speed. Restitution applies on the ground, walls and ceiling, and a
//! rest snap makes the ball always settle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{ArenaConfig, BallConfig};

/// Things that happened to the ball during one integration step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BallOutcome {
    /// Downward speed at a ground contact that produced a rebound
    pub bounce: Option<f32>,
    pub hit_wall: bool,
    /// Ball settled on the ground this step
    pub came_to_rest: bool,
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated spin (radians)
    pub rotation: f32,
    pub radius: f32,
    /// Already kicked by the current gesture
    pub struck: bool,
}

impl Ball {
    pub fn new(config: &BallConfig) -> Self {
        Self {
            pos: config.start,
            vel: Vec2::ZERO,
            rotation: 0.0,
            radius: config.radius,
            struck: false,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn on_ground(&self, arena: &ArenaConfig) -> bool {
        self.pos.y >= arena.ground_line
    }

    /// Resting balls are not integrated
    pub fn is_resting(&self, config: &BallConfig, arena: &ArenaConfig) -> bool {
        self.on_ground(arena) && self.speed() < config.rest_epsilon
    }

    /// Advance the ball by `dt` frames
    pub fn step(&mut self, config: &BallConfig, arena: &ArenaConfig, dt: f32) -> BallOutcome {
        let mut outcome = BallOutcome::default();

        if self.is_resting(config, arena) {
            self.vel = Vec2::ZERO;
            return outcome;
        }

        // Position before velocity; gravity only acts off the ground line
        self.vel.x *= config.friction;
        self.pos += self.vel * dt;

        if self.on_ground(arena) {
            outcome.bounce = self.resolve_ground(config, arena);
        } else {
            self.vel.y += config.gravity * dt;
        }
        outcome.hit_wall = self.resolve_walls(config, arena);

        self.rotation += self.speed() * config.spin_factor * dt;

        if self.on_ground(arena) && self.speed() < config.rest_epsilon {
            self.vel = Vec2::ZERO;
            outcome.came_to_rest = true;
            log::debug!("Ball at rest at x={:.1}", self.pos.x);
        }

        outcome
    }

    fn resolve_ground(&mut self, config: &BallConfig, arena: &ArenaConfig) -> Option<f32> {
        self.pos.y = arena.ground_line;
        self.vel.x *= config.ground_friction;
        if self.vel.y <= 0.0 {
            return None;
        }

        let impact = self.vel.y;
        self.vel.y *= -config.restitution;

        // Kill micro-bounces
        if self.vel.y.abs() < config.bounce_stop {
            self.vel.y = 0.0;
            return None;
        }
        Some(impact)
    }

    fn resolve_walls(&mut self, config: &BallConfig, arena: &ArenaConfig) -> bool {
        let r = self.radius;
        let e = config.restitution;
        let mut hit = false;

        if self.pos.x - r <= 0.0 {
            self.pos.x = r;
            if self.vel.x < 0.0 {
                self.vel.x *= -e;
                hit = true;
            }
        } else if self.pos.x + r >= arena.width {
            self.pos.x = arena.width - r;
            if self.vel.x > 0.0 {
                self.vel.x *= -e;
                hit = true;
            }
        }

        if self.pos.y - r < 0.0 {
            self.pos.y = r;
            if self.vel.y < 0.0 {
                self.vel.y *= -e;
                hit = true;
            }
        }

        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(&BallConfig::default());
        ball.pos = pos;
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_launch_from_rest_rebounds_at_launch_speed() {
        let arena = ArenaConfig::default();
        let config = BallConfig::default();
        let mut ball = Ball::new(&config);
        assert!(ball.is_resting(&config, &arena));
        ball.vel = Vec2::new(0.0, -10.0);

        let mut contacts = Vec::new();
        for _ in 0..1000 {
            if let Some(impact) = ball.step(&config, &arena, 1.0).bounce {
                contacts.push((impact, -ball.vel.y));
            }
            if ball.is_resting(&config, &arena) {
                break;
            }
        }

        assert!(contacts.len() >= 3);
        let (impact, rebound) = contacts[0];
        assert!((impact - 10.0).abs() < 1e-4, "impact {impact}");
        assert!((rebound - 7.0).abs() < 1e-4, "rebound {rebound}");
        assert!((contacts[1].1 - 4.9).abs() < 1e-4);
        for &(impact, rebound) in &contacts {
            assert!((rebound - impact * config.restitution).abs() < 1e-4);
            assert!(rebound >= config.bounce_stop);
        }
        for pair in contacts.windows(2) {
            assert!(pair[1].1 < pair[0].1);
        }
        assert_eq!(ball.pos.y, arena.ground_line);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_ground_friction_while_sliding() {
        let arena = ArenaConfig::default();
        let config = BallConfig::default();
        let mut ball = ball_at(Vec2::new(400.0, arena.ground_line), Vec2::new(10.0, 0.0));
        let outcome = ball.step(&config, &arena, 1.0);
        assert_eq!(outcome.bounce, None);
        assert_eq!(ball.pos.y, arena.ground_line);
        assert_eq!(ball.vel.y, 0.0);
        let expected = 10.0 * config.friction * config.ground_friction;
        assert!((ball.vel.x - expected).abs() < 1e-4);
    }

    #[test]
    fn test_successive_rebounds_decay() {
        let arena = ArenaConfig::default();
        let config = BallConfig {
            gravity: 0.05,
            restitution: 0.7,
            ..Default::default()
        };
        let mut ball = ball_at(Vec2::new(500.0, arena.ground_line), Vec2::new(0.0, 10.0));

        let mut rebounds = Vec::new();
        for _ in 0..5000 {
            if ball.step(&config, &arena, 1.0).bounce.is_some() {
                rebounds.push(-ball.vel.y);
            }
            if ball.is_resting(&config, &arena) {
                break;
            }
        }

        assert!(rebounds.len() >= 4);
        assert!((rebounds[0] - 7.0).abs() < 0.05);
        for pair in rebounds.windows(2).take(3) {
            let ratio = pair[1] / pair[0];
            assert!((ratio - 0.7).abs() < 0.02, "ratio {ratio}");
        }
        assert!(rebounds.iter().all(|&v| v >= config.bounce_stop));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_drop_settles_on_ground() {
        let arena = ArenaConfig::default();
        let config = BallConfig::default();
        let mut ball = ball_at(Vec2::new(400.0, 300.0), Vec2::ZERO);
        let mut rested = false;
        for _ in 0..2000 {
            rested |= ball.step(&config, &arena, 1.0).came_to_rest;
        }
        assert!(rested);
        assert_eq!(ball.pos.y, arena.ground_line);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(ball.is_resting(&config, &arena));
    }

    #[test]
    fn test_resting_ball_is_skipped() {
        let arena = ArenaConfig::default();
        let config = BallConfig::default();
        let mut ball = ball_at(Vec2::new(400.0, arena.ground_line), Vec2::new(0.01, 0.0));
        let rotation = ball.rotation;
        let outcome = ball.step(&config, &arena, 1.0);
        assert_eq!(outcome, BallOutcome::default());
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.pos.x, 400.0);
        assert_eq!(ball.rotation, rotation);
    }

    #[test]
    fn test_wall_reflects() {
        let arena = ArenaConfig::default();
        let config = BallConfig {
            gravity: 0.0,
            ..Default::default()
        };
        let r = config.radius;
        let mut ball = ball_at(Vec2::new(arena.width - r - 1.0, 300.0), Vec2::new(10.0, 0.0));
        assert!(ball.step(&config, &arena, 1.0).hit_wall);
        assert_eq!(ball.pos.x, arena.width - r);
        assert!(ball.vel.x < 0.0);

        let mut ball = ball_at(Vec2::new(r + 1.0, 300.0), Vec2::new(-10.0, 0.0));
        assert!(ball.step(&config, &arena, 1.0).hit_wall);
        assert_eq!(ball.pos.x, r);
        assert!((ball.vel.x - 10.0 * config.friction * config.restitution).abs() < 1e-4);
    }

    #[test]
    fn test_ceiling_reflects() {
        let arena = ArenaConfig::default();
        let config = BallConfig::default();
        let mut ball = ball_at(Vec2::new(400.0, config.radius + 2.0), Vec2::new(0.0, -20.0));
        assert!(ball.step(&config, &arena, 1.0).hit_wall);
        assert_eq!(ball.pos.y, config.radius);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_spin_tracks_speed() {
        let arena = ArenaConfig::default();
        let config = BallConfig {
            gravity: 0.0,
            friction: 1.0,
            ..Default::default()
        };
        let mut ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -4.0));
        ball.step(&config, &arena, 2.0);
        assert!((ball.rotation - 5.0 * config.spin_factor * 2.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_friction_never_flips_sign(vx in -50.0f32..50.0, friction in 0.0f32..=1.0) {
            let arena = ArenaConfig { width: 1.0e7, ..Default::default() };
            let config = BallConfig { gravity: 0.0, friction, ..Default::default() };
            let mut ball = ball_at(Vec2::new(5.0e6, 300.0), Vec2::new(vx, 0.0));
            for _ in 0..200 {
                let before = ball.vel.x;
                ball.step(&config, &arena, 1.0);
                prop_assert!(before * ball.vel.x >= 0.0);
                prop_assert!(ball.vel.x.abs() <= before.abs());
            }
        }

        #[test]
        fn prop_ball_always_settles(
            x in 30.0f32..990.0,
            y in 30.0f32..700.0,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
        ) {
            let arena = ArenaConfig::default();
            let config = BallConfig::default();
            let mut ball = ball_at(Vec2::new(x, y), Vec2::new(vx, vy));
            for _ in 0..5000 {
                ball.step(&config, &arena, 1.0);
                prop_assert!(ball.pos.y <= arena.ground_line);
                prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= arena.width - ball.radius);
            }
            prop_assert_eq!(ball.pos.y, arena.ground_line);
            prop_assert_eq!(ball.vel, Vec2::ZERO);
        }
    }
}
