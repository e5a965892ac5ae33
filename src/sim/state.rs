//! Simulation state
//!
//! Everything a tick mutates lives in [`SimState`]. It is owned by the caller
//! driving the frame loop and never shared between ticks in flight.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::HeaderKind;
use super::motion::Character;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Notable things that happened during a tick, for sound/effects layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    KickStarted,
    KickFinished,
    BallKicked { power: f32 },
    Header { kind: HeaderKind },
    BallBounced { impact_speed: f32 },
    BallHitWall,
    BallAtRest,
    Jumped,
    Landed,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub config: SimConfig,
    pub character: Character,
    pub ball: Ball,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

impl SimState {
    /// Validate `config` and place the character and ball at their start positions
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let character = Character::new(&config.character);
        let ball = Ball::new(&config.ball);
        log::info!(
            "Simulation ready: arena {}x{}, {:?} mode, kick {} frames",
            config.arena.width,
            config.arena.height,
            config.motion.mode,
            config.kick.total_frames()
        );
        Ok(Self {
            config,
            character,
            ball,
            time_ticks: 0,
        })
    }
}
