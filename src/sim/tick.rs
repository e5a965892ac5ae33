//! Simulation tick
//!
//! Advances the kick gesture, character motion, ball and limb collisions in a
//! fixed order, then clamps the character to the arena.

use super::collision::{resolve_foot, resolve_head};
use super::state::{SimEvent, SimState};
use crate::input::{Control, ControlSnapshot};

/// Advance the simulation by one tick.
///
/// `dt` scales velocities and gravity (1.0 is one 60 Hz frame). The kick
/// gesture always advances exactly one frame per tick.
pub fn tick(state: &mut SimState, input: &ControlSnapshot, dt: f32) -> Vec<SimEvent> {
    let mut events = Vec::new();
    let config = &state.config;
    let character = &mut state.character;
    let ball = &mut state.ball;

    state.time_ticks += 1;

    // Kick gesture
    if input.held(Control::Kick) && character.kick.trigger() {
        log::debug!("Kick triggered at tick {}", state.time_ticks);
        events.push(SimEvent::KickStarted);
    }
    let frame = character.kick.advance(&config.kick, 1);
    character.foot = frame.pose;

    // Character motion
    let motion = character.step(&config.motion, input, dt);
    if motion.jumped {
        events.push(SimEvent::Jumped);
    }
    if motion.landed {
        events.push(SimEvent::Landed);
    }

    // Ball
    let outcome = ball.step(&config.ball, &config.arena, dt);
    if let Some(impact_speed) = outcome.bounce {
        events.push(SimEvent::BallBounced { impact_speed });
    }
    if outcome.hit_wall {
        events.push(SimEvent::BallHitWall);
    }
    if outcome.came_to_rest {
        events.push(SimEvent::BallAtRest);
    }

    // Limb contacts
    if let Some(kick) = resolve_foot(character, &frame, ball, &config.contact) {
        events.push(SimEvent::BallKicked { power: kick.power });
    }
    if let Some(header) = resolve_head(character, ball, &config.contact, &config.arena) {
        events.push(SimEvent::Header { kind: header.kind });
    }

    // Gesture over: the next kick may strike again
    if frame.finished {
        ball.struck = false;
        events.push(SimEvent::KickFinished);
    }

    character.clamp_to(&config.arena, &config.character);

    events
}
