//! Limb-ball collision detection and response
//!
//! Both colliders are circles tested against the ball center using only the
//! current tick's positions. There is no swept test: a fast enough ball can
//! tunnel through, which the generous contact radii keep rare.

use glam::Vec2;

use super::ball::Ball;
use super::kick::KickFrame;
use super::motion::Character;
use crate::config::{ArenaConfig, ContactConfig};

/// Overlap between a collider circle and the ball center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the collider toward the ball
    pub normal: Vec2,
    pub distance: f32,
}

/// Circle-point overlap test. Coincident centers resolve straight up.
pub fn circle_contact(collider: Vec2, target: Vec2, radius: f32) -> Option<Contact> {
    let delta = target - collider;
    let distance = delta.length();
    if distance >= radius {
        return None;
    }
    Some(Contact {
        normal: delta.try_normalize().unwrap_or(Vec2::NEG_Y),
        distance,
    })
}

/// A registered kick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickImpact {
    pub power: f32,
    pub velocity: Vec2,
}

/// How a header was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Deliberate contact: fixed strong impulse
    Active { airborne: bool },
    /// Ball drifted into the head: damped redirect
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderImpact {
    pub kind: HeaderKind,
    pub velocity: Vec2,
}

/// Foot against ball. Registers at most once per gesture via the struck flag.
pub fn resolve_foot(
    character: &Character,
    frame: &KickFrame,
    ball: &mut Ball,
    config: &ContactConfig,
) -> Option<KickImpact> {
    if !frame.is_striking() || ball.struck {
        return None;
    }

    let contact = circle_contact(character.foot_world(), ball.pos, config.foot_radius)?;

    let power = config.base_kick_power + frame.progress * config.kick_power_ramp;
    let velocity = contact.normal * power + Vec2::new(0.0, -config.kick_lift);

    ball.struck = true;
    ball.vel = velocity;
    log::info!(
        "Kick at progress {:.2}: power {:.1}, velocity ({:.1}, {:.1})",
        frame.progress,
        power,
        velocity.x,
        velocity.y
    );

    Some(KickImpact { power, velocity })
}

/// Head against ball. Evaluated every tick regardless of kick phase.
pub fn resolve_head(
    character: &Character,
    ball: &mut Ball,
    config: &ContactConfig,
    arena: &ArenaConfig,
) -> Option<HeaderImpact> {
    let head = character.head_world();
    let contact = circle_contact(head, ball.pos, config.head_radius)?;
    let reach = config.head_radius + config.separation;
    let (position, normal) = place_outside(head, contact.normal, reach, ball.radius, arena);

    let airborne = !character.grounded;
    let active = airborne
        || character.is_moving_horizontally()
        || ball.speed() > config.active_speed_threshold;

    let (kind, mut velocity) = if active {
        let power = if airborne {
            config.header_power_airborne
        } else {
            config.header_power
        };
        (HeaderKind::Active { airborne }, normal * power)
    } else {
        // Tunable: keeps a fraction of the incoming speed, floored
        let speed = (ball.speed() * config.passive_damping).max(config.passive_min_speed);
        (HeaderKind::Passive, normal * speed)
    };

    // Ball sits on top of the head
    if normal.y < 0.0 {
        velocity.y -= config.header_lift;
    }

    ball.vel = velocity;
    ball.pos = position;

    log::info!(
        "Header ({:?}): velocity ({:.1}, {:.1})",
        kind,
        velocity.x,
        velocity.y
    );

    Some(HeaderImpact { kind, velocity })
}

/// Where a headed ball ends up: `reach` from the head along `normal`, inside
/// the arena. If a wall or the ground pushes it back within `reach`, it slides
/// up along that boundary onto the top of the reach circle and the returned
/// normal follows it.
fn place_outside(
    head: Vec2,
    normal: Vec2,
    reach: f32,
    radius: f32,
    arena: &ArenaConfig,
) -> (Vec2, Vec2) {
    let pushed = head + normal * reach;
    let mut pos = Vec2::new(
        pushed.x.clamp(radius, (arena.width - radius).max(radius)),
        pushed.y.min(arena.ground_line),
    );
    if pos == pushed || pos.distance(head) >= reach {
        return (pos, normal);
    }

    let dx = (pos.x - head.x).clamp(-reach, reach);
    pos.y = head.y - (reach * reach - dx * dx).sqrt();
    let normal = (pos - head).try_normalize().unwrap_or(Vec2::NEG_Y);
    (pos, normal)
}
